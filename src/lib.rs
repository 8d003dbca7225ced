#[macro_use] extern crate log;

pub mod api;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod currency;
pub mod filters;
pub mod id_gen;
pub mod item;
pub mod order;
pub mod order_state;
pub mod seed;
pub mod validation;

pub use crate::{
  config::Config,
  item::{Course, MenuItem, OrderItem, Price},
  order_state::OrderState,
  validation::ValidationError,
};
