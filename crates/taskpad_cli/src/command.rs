//! Line command parsing for the terminal front-end.

use std::error::Error;
use std::fmt::{Display, Formatter};
use taskpad_core::{TaskId, UserIntent};

pub const HELP: &str = "\
commands:
  add <text>          add a task
  edit <id> <text>    replace the text of a task
  toggle <id>         mark a task done / not done (alias: done)
  delete <id>         remove a task (alias: rm)
  list                show all tasks
  help                show this help
  quit                leave (alias: exit)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(UserIntent),
    List,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument { command: &'static str, argument: &'static str },
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` needs <{argument}>")
            }
            Self::InvalidId(raw) => write!(f, "`{raw}` is not a task id"),
        }
    }
}

impl Error for CommandError {}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Nothing),
        "add" => {
            let text = required(rest, "add", "text")?;
            Ok(Command::Intent(UserIntent::Add(text.to_string())))
        }
        "edit" => {
            let args = required(rest, "edit", "id")?;
            let (raw_id, text) = match args.split_once(char::is_whitespace) {
                Some((raw_id, text)) => (raw_id, text.trim()),
                None => (args, ""),
            };
            let id = parse_id(raw_id)?;
            let text = required(text, "edit", "text")?;
            Ok(Command::Intent(UserIntent::Edit(id, text.to_string())))
        }
        "toggle" | "done" => {
            let id = parse_id(required(rest, "toggle", "id")?)?;
            Ok(Command::Intent(UserIntent::Toggle(id)))
        }
        "delete" | "rm" => {
            let id = parse_id(required(rest, "delete", "id")?)?;
            Ok(Command::Intent(UserIntent::Delete(id)))
        }
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

fn parse_id(raw: &str) -> Result<TaskId, CommandError> {
    raw.parse::<TaskId>()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
