use crate::command::{self, Command, HELP};
use menu_order::{
  api::{AddAllOutcome, ClearOutcome, ToggleOutcome},
  Course, MenuItem, OrderState,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};

macro_rules! log_info {
  ($session: expr, $msg: expr) => {
    info!("[Session {}] {}", $session, $msg);
  };
}
macro_rules! log_warn {
  ($session: expr, $msg: expr) => {
    warn!("[Session {}] {}", $session, $msg);
  };
}

pub struct Shell {
  session: String,
  state: OrderState,
}

impl Shell {
  pub fn new(session: String, state: OrderState) -> Shell {
    Shell {
      session,
      state,
    }
  }

  pub fn state(&self) -> &OrderState {
    &self.state
  }

  /// Reads commands until `quit` or end of input.
  pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome! {} menu items, type 'help' for commands.", self.state.count_menu_items())?;
    for line in input.lines() {
      let line = line?;
      if line.trim().is_empty() {
        continue
      }
      match command::parse(&line) {
        Ok(Command::Quit) => break,
        Ok(cmd) => self.execute(cmd, out)?,
        Err(e) => {
          log_warn!(self.session, format!("Bad command {:?}: {}", line, e));
          writeln!(out, "Error: {}", e)?;
        },
      }
    }
    log_info!(self.session, format!("Leaving with {} entries in the order", self.state.order_len()));
    Ok(())
  }

  pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
    match cmd {
      Command::Menu => {
        for course in Course::ALL.iter() {
          if !self.state.active_filters().contains(*course) {
            continue
          }
          self.write_course(*course, out)?;
        }
      },
      Command::Course(course) => self.write_course(course, out)?,
      Command::Filters => {
        let names: Vec<String> = self.state.active_filters().courses()
          .iter()
          .map(|c| format!("{} {}", c.emoji(), c))
          .collect();
        if names.is_empty() {
          writeln!(out, "No course selected")?;
        } else {
          writeln!(out, "Showing: {}", names.join(", "))?;
        }
      },
      Command::Toggle(course) => match self.state.toggle_course_filter(course) {
        ToggleOutcome::Enabled => writeln!(out, "Showing {}", course)?,
        ToggleOutcome::Disabled => writeln!(out, "Hiding {}", course)?,
        ToggleOutcome::Refused => writeln!(out, "At least one course must stay selected")?,
      },
      Command::SelectAll => {
        self.state.select_all_filters();
        writeln!(out, "Showing all courses")?;
      },
      Command::ClearFilters => {
        self.state.clear_all_filters();
        writeln!(out, "No course selected")?;
      },
      Command::Add(id) => {
        let item = self.state.find_menu_item(&id).cloned();
        match item {
          Some(item) => {
            self.state.add_to_order(&item);
            writeln!(out, "Added {} to your order ({} in order)", item.name, self.state.order_count_of(&id))?;
          },
          None => writeln!(out, "No menu item with id {}", id)?,
        }
      },
      Command::AddAll => match self.state.add_visible_to_order() {
        AddAllOutcome::NothingAdded => writeln!(out, "No menu items to add.")?,
        AddAllOutcome::Added(n) => writeln!(out, "All {} delicious items added to your order!", n)?,
      },
      Command::Remove(id) => match self.state.remove_from_order(&id) {
        Some(item) => writeln!(out, "Removed {} from your order", item.name)?,
        None => writeln!(out, "Nothing with id {} in your order", id)?,
      },
      Command::Order => {
        if self.state.list_order().is_empty() {
          writeln!(out, "Your order is empty")?;
        }
        for item in self.state.list_order() {
          writeln!(out, "  [{}] {} {}", item.id, item.name, self.state.format_amount(item.price))?;
        }
        self.write_total(out)?;
      },
      Command::Total => self.write_total(out)?,
      Command::Clear => match self.state.clear_order() {
        ClearOutcome::NothingToClear => writeln!(out, "Your order is already empty")?,
        ClearOutcome::Cleared(n) => writeln!(out, "Cleared {} items from your order", n)?,
      },
      Command::Dish(param) => match self.state.add_dish(&param) {
        Ok(item) => {
          log_info!(self.session, format!("New dish {:?}", item));
          writeln!(out, "Dish added successfully! [{}] {}", item.id, item.name)?;
        },
        Err(e) => writeln!(out, "Error: {}", e)?,
      },
      Command::Count => writeln!(out, "Total menu items: {}", self.state.count_menu_items())?,
      Command::Help => writeln!(out, "{}", HELP)?,
      Command::Quit => {},
    }
    Ok(())
  }

  fn write_course<W: Write>(&self, course: Course, out: &mut W) -> io::Result<()> {
    let items = self.state.items_by_course(course);
    if items.is_empty() {
      return Ok(())
    }
    writeln!(out, "{} {}", course.emoji(), course.name().to_uppercase())?;
    for item in &items {
      self.write_item(item, out)?;
    }
    Ok(())
  }

  fn write_item<W: Write>(&self, item: &MenuItem, out: &mut W) -> io::Result<()> {
    let mark = match self.state.order_count_of(&item.id) {
      0 => "".to_string(),
      n => format!("  (x{} in order)", n),
    };
    writeln!(out, "  [{}] {} {}{}", item.id, item.name, self.state.format_amount(item.price), mark)?;
    writeln!(out, "      {}", item.description)
  }

  fn write_total<W: Write>(&self, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total: {}", self.state.format_amount(self.state.order_total()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use menu_order::{
    clock::arbitrary_clock::ArbitraryClock,
    Config, Price,
  };
  use std::sync::Arc;

  fn run_script(script: &str) -> (Shell, String) {
    let state = OrderState::new(Config::default(), Arc::new(ArbitraryClock::at(1_700_000_000_000)));
    let mut shell = Shell::new("test".to_string(), state);
    let mut out = vec![];
    shell.run(script.as_bytes(), &mut out).unwrap();
    (shell, String::from_utf8(out).unwrap())
  }

  #[test]
  fn test_order_session() {
    let (shell, out) = run_script("add 2\nadd 2\ntotal\nremove 2\ntotal\nquit\nadd 1\n");
    assert!(out.contains("Total: R490.00"));
    assert!(out.contains("Total: R245.00"));
    // nothing after quit runs
    assert_eq!(1, shell.state().order_len());
  }

  #[test]
  fn test_filtered_add_all() {
    let (shell, out) = run_script("none\ntoggle beverages\naddall\n");
    assert!(out.contains("All 5 delicious items added to your order!"));
    assert_eq!(Price::from_cents(22500), shell.state().order_total());
  }

  #[test]
  fn test_menu_hides_filtered_courses() {
    let (_, out) = run_script("none\ntoggle desserts\nmenu\n");
    assert!(out.contains("VANILLA ICE CREAM NOUGAT"));
    assert!(!out.contains("STEAK FILLET 300G"));
  }

  #[test]
  fn test_dish_and_errors() {
    let (shell, out) = run_script(concat!(
      "dish {\"name\":\"\",\"price\":\"10\"}\n",
      "dish {\"name\":\"SOUP\",\"price\":\"abc\"}\n",
      "dish {\"name\":\"SOUP\",\"price\":\"40\"}\n",
      "fly\n",
      "clear\n",
    ));
    assert!(out.contains("Error: Please enter a dish name"));
    assert!(out.contains("Error: Please enter a valid price"));
    assert!(out.contains("Dish added successfully!"));
    assert!(out.contains("Unknown command 'fly'"));
    assert!(out.contains("Your order is already empty"));
    assert_eq!(11, shell.state().count_menu_items());
  }
}
