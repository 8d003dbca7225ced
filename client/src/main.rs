mod command;
mod shell;

use menu_order::{
  clock::utc_clock::UtcClock,
  Config, OrderState,
};
use shell::Shell;
use simple_logger::SimpleLogger;
use log::{info, LevelFilter};
use chrono::Utc;
use std::{env, io, str::FromStr, sync::Arc};

fn log_level() -> LevelFilter {
  env::var("MENU_LOG")
    .ok()
    .and_then(|s| LevelFilter::from_str(&s).ok())
    .unwrap_or(LevelFilter::Warn)
}

/*
  cargo run -p client -- menu.json
  echo '{"insert_position":"prepend","description_policy":"required"}' > menu.json
*/
fn main() -> Result<(), Box<dyn std::error::Error>> {
  SimpleLogger::new().with_level(log_level()).init()?;

  let config = match env::args().nth(1) {
    Some(path) => Config::from_file(&path)?,
    None => Config::default(),
  };
  info!("Starting with {:?}", config);

  let state = OrderState::new(config, Arc::new(UtcClock()));
  let session = Utc::now().format("%Y%m%d-%H%M%S").to_string();
  let mut shell = Shell::new(session, state);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  shell.run(stdin.lock(), &mut out)?;

  let state = shell.state();
  info!("Final order: {} entries, total {}", state.order_len(), state.format_amount(state.order_total()));
  Ok(())
}
