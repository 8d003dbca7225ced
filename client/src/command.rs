use menu_order::{api::AddDishParam, Course};
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Command {
  Menu,
  Course(Course),
  Filters,
  Toggle(Course),
  SelectAll,
  ClearFilters,
  Add(String),
  AddAll,
  Remove(String),
  Order,
  Total,
  Clear,
  Dish(AddDishParam),
  Count,
  Help,
  Quit,
}

#[derive(Debug)]
pub enum CommandError {
  Empty,
  Unknown(String),
  MissingArg(&'static str),
  BadCourse(String),
  BadDish(serde_json::Error),
}

impl fmt::Display for CommandError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      CommandError::Empty => write!(f, "Empty command"),
      CommandError::Unknown(s) => write!(f, "Unknown command '{}', try 'help'", s),
      CommandError::MissingArg(cmd) => write!(f, "'{}' needs an argument", cmd),
      CommandError::BadCourse(s) => write!(f, "Unknown course '{}'", s),
      CommandError::BadDish(e) => write!(f, "Bad dish JSON: {}", e),
    }
  }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
menu              show the menu (active filters applied)
course <c>        show one course
filters           show active course filters
toggle <c>        toggle a course filter
all | none        select all / clear all course filters
add <id>          add a menu item to the order
addall            add every shown menu item to the order
remove <id>       remove one entry from the order
order | total     show the order / its total
clear             clear the order
dish <json>       add a dish, e.g. dish {\"name\":\"SOUP\",\"course\":\"Starters\",\"price\":\"40\"}
count             number of menu items
quit";

fn course_arg(cmd: &'static str, arg: &str) -> Result<Course, CommandError> {
  if arg.is_empty() {
    return Err(CommandError::MissingArg(cmd))
  }
  arg.parse().map_err(|_| CommandError::BadCourse(arg.to_string()))
}

fn id_arg(cmd: &'static str, arg: &str) -> Result<String, CommandError> {
  if arg.is_empty() {
    return Err(CommandError::MissingArg(cmd))
  }
  Ok(arg.to_string())
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
  let line = line.trim();
  let (cmd, arg) = match line.find(char::is_whitespace) {
    Some(i) => (&line[..i], line[i..].trim()),
    None => (line, ""),
  };

  match cmd.to_lowercase().as_str() {
    "" => Err(CommandError::Empty),
    "menu" | "ls" => Ok(Command::Menu),
    "course" => Ok(Command::Course(course_arg("course", arg)?)),
    "filters" => Ok(Command::Filters),
    "toggle" => Ok(Command::Toggle(course_arg("toggle", arg)?)),
    "all" => Ok(Command::SelectAll),
    "none" => Ok(Command::ClearFilters),
    "add" => Ok(Command::Add(id_arg("add", arg)?)),
    "addall" => Ok(Command::AddAll),
    "remove" | "rm" => Ok(Command::Remove(id_arg("remove", arg)?)),
    "order" => Ok(Command::Order),
    "total" => Ok(Command::Total),
    "clear" => Ok(Command::Clear),
    "dish" => {
      if arg.is_empty() {
        return Err(CommandError::MissingArg("dish"))
      }
      let param = serde_json::from_str::<AddDishParam>(arg).map_err(CommandError::BadDish)?;
      Ok(Command::Dish(param))
    },
    "count" => Ok(Command::Count),
    "help" | "?" => Ok(Command::Help),
    "quit" | "exit" | "q" => Ok(Command::Quit),
    _ => Err(CommandError::Unknown(cmd.to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_simple_commands() {
    assert_eq!(Command::Menu, parse("menu").unwrap());
    assert_eq!(Command::AddAll, parse("  ADDALL ").unwrap());
    assert_eq!(Command::Quit, parse("q").unwrap());
  }

  #[test]
  fn test_commands_with_args() {
    assert_eq!(Command::Add("2".to_string()), parse("add 2").unwrap());
    assert_eq!(Command::Remove("10".to_string()), parse("rm   10").unwrap());
    assert_eq!(Command::Toggle(Course::MainDishes), parse("toggle Main Dishes").unwrap());
    assert_eq!(Command::Course(Course::Beverages), parse("course drinks").unwrap());
  }

  #[test]
  fn test_dish() {
    match parse(r#"dish {"name":"SOUP","price":"40"}"#) {
      Ok(Command::Dish(p)) => {
        assert_eq!("SOUP", p.name);
        assert_eq!("40", p.price);
        assert_eq!("Starters", p.course);
      },
      x => panic!("unexpected {:?}", x),
    }
    match parse("dish {oops") {
      Err(CommandError::BadDish(_)) => {},
      x => panic!("unexpected {:?}", x),
    }
  }

  #[test]
  fn test_errors() {
    match parse("") { Err(CommandError::Empty) => {}, x => panic!("unexpected {:?}", x) }
    match parse("add") { Err(CommandError::MissingArg("add")) => {}, x => panic!("unexpected {:?}", x) }
    match parse("toggle soup") { Err(CommandError::BadCourse(_)) => {}, x => panic!("unexpected {:?}", x) }
    match parse("fly") { Err(CommandError::Unknown(_)) => {}, x => panic!("unexpected {:?}", x) }
  }
}
