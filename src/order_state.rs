use crate::{
  api::{AddAllOutcome, AddDishParam, ClearOutcome, ToggleOutcome},
  catalog::Catalog,
  clock::Clock,
  config::Config,
  currency::format_amount,
  filters::CourseFilter,
  id_gen::IdGen,
  item::{Course, MenuItem, OrderItem, Price},
  order::Order,
  seed::seed_catalog,
  validation::{self, ValidationError},
};
use std::sync::Arc;

/// Catalog, current order and active course filters of one session.
pub struct OrderState {
  config: Config,
  catalog: Catalog,
  order: Order,
  filters: CourseFilter,
  id_gen: IdGen,
}

impl OrderState {
  pub fn new(config: Config, clock: Arc<dyn Clock>) -> OrderState {
    OrderState::with_catalog(seed_catalog(), config, clock)
  }

  pub fn with_catalog(
    items: Vec<MenuItem>,
    config: Config,
    clock: Arc<dyn Clock>,
  ) -> OrderState {
    let catalog = Catalog::new(items);
    let mut id_gen = IdGen::new(clock);
    id_gen.reserve(catalog.ids());
    let filters = CourseFilter::of(&config.initial_filters);

    OrderState {
      config,
      catalog,
      order: Order::new(),
      filters,
      id_gen,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn format_amount(&self, price: Price) -> String {
    format_amount(&self.config.currency_marker, price)
  }

  // catalog queries

  pub fn list_menu_items(&self) -> &[MenuItem] {
    self.catalog.get_all()
  }

  pub fn count_menu_items(&self) -> usize {
    self.catalog.len()
  }

  pub fn find_menu_item(&self, id: &str) -> Option<&MenuItem> {
    self.catalog.get(id)
  }

  pub fn filter_by_courses(&self, active: &CourseFilter) -> Vec<MenuItem> {
    self.catalog.filtered(active)
  }

  pub fn items_by_course(&self, course: Course) -> Vec<MenuItem> {
    self.catalog.by_course(course)
  }

  /// Catalog entries passing the session's own active filters.
  pub fn visible_menu_items(&self) -> Vec<MenuItem> {
    self.catalog.filtered(&self.filters)
  }

  // catalog mutation

  pub fn add_menu_item(
    &mut self,
    name: &str,
    description: &str,
    course: Course,
    price: &str,
  ) -> Result<MenuItem, ValidationError> {
    let (name, description, price) = match self.validate_dish(name, description, price) {
      Ok(x) => x,
      Err(e) => {
        warn!("Rejected new dish: {}", e);
        return Err(e)
      },
    };

    let item = MenuItem {
      id: self.id_gen.next_id(),
      name,
      description,
      course,
      price,
    };
    self.catalog.insert(item.clone(), self.config.insert_position);
    info!("Added dish {} ({}) to the menu as {}", item.name, item.course, item.id);
    Ok(item)
  }

  // name, then description, then price, as the form checks them
  fn validate_dish(
    &self,
    name: &str,
    description: &str,
    price: &str,
  ) -> Result<(String, String, Price), ValidationError> {
    let name = validation::validate_name(name)?;
    let description = validation::validate_description(
      description,
      self.config.description_policy,
      &self.config.description_placeholder,
    )?;
    let price = validation::parse_price(price)?;
    Ok((name, description, price))
  }

  /// Same as `add_menu_item`, but takes the raw form. An unparseable course
  /// falls back to the form's default course.
  pub fn add_dish(&mut self, param: &AddDishParam) -> Result<MenuItem, ValidationError> {
    let course = match param.course.parse::<Course>() {
      Ok(c) => c,
      Err(e) => {
        warn!("{}, using {}", e, Course::Starters);
        Course::Starters
      },
    };
    self.add_menu_item(&param.name, &param.description, course, &param.price)
  }

  // order operations

  pub fn add_to_order(&mut self, item: &MenuItem) {
    self.order.add(item.clone());
    info!("Added {} to the order ({} entries)", item.name, self.order.len());
  }

  pub fn add_all_to_order(&mut self, items: &[MenuItem]) -> AddAllOutcome {
    if items.is_empty() {
      warn!("No menu items to add");
      return AddAllOutcome::NothingAdded
    }
    for item in items {
      self.order.add(item.clone());
    }
    info!("Added all {} items to the order", items.len());
    AddAllOutcome::Added(items.len())
  }

  /// Adds every catalog entry passing the active filters.
  pub fn add_visible_to_order(&mut self) -> AddAllOutcome {
    let items = self.visible_menu_items();
    self.add_all_to_order(&items)
  }

  pub fn remove_from_order(&mut self, item_id: &str) -> Option<OrderItem> {
    match self.order.remove_first(item_id) {
      Some(x) => {
        info!("Removed {} from the order", x.name);
        Some(x)
      },
      None => {
        warn!("Item {} not in the order", item_id);
        None
      },
    }
  }

  pub fn clear_order(&mut self) -> ClearOutcome {
    match self.order.clear() {
      0 => {
        warn!("Order is already empty");
        ClearOutcome::NothingToClear
      },
      n => {
        info!("Cleared {} entries from the order", n);
        ClearOutcome::Cleared(n)
      },
    }
  }

  pub fn is_in_order(&self, item_id: &str) -> bool {
    self.order.contains(item_id)
  }

  pub fn order_count_of(&self, item_id: &str) -> usize {
    self.order.count_of(item_id)
  }

  pub fn list_order(&self) -> &[OrderItem] {
    self.order.get_all()
  }

  pub fn order_len(&self) -> usize {
    self.order.len()
  }

  pub fn order_total(&self) -> Price {
    self.order.total()
  }

  // filter operations

  pub fn active_filters(&self) -> &CourseFilter {
    &self.filters
  }

  pub fn toggle_course_filter(&mut self, course: Course) -> ToggleOutcome {
    let outcome = self.filters.toggle(course);
    match outcome {
      ToggleOutcome::Refused => warn!("Refusing to turn off {}, the last active course", course),
      _ => info!("Course filter {} -> {:?}", course, outcome),
    }
    outcome
  }

  pub fn select_all_filters(&mut self) {
    self.filters.select_all();
    info!("All course filters selected");
  }

  pub fn clear_all_filters(&mut self) {
    self.filters.clear();
    info!("All course filters cleared");
  }
}
