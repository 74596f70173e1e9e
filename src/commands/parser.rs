//! Input line parsing.

use std::convert::Infallible;
use std::str::FromStr;

/// A console command, selected by the first word of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    /// `exit` or `close`
    Exit,
    /// Anything else
    Unknown,
}

impl Command {
    /// The keyword that selects this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::RemovePhone => "remove-phone",
            Command::Exit => "exit",
            Command::Unknown => "unknown",
        }
    }

    /// Names of the positional arguments, in order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Command::Add => &["name", "phone"],
            Command::Change => &["name", "old phone", "new phone"],
            Command::Phone | Command::ShowBirthday | Command::Delete => &["name"],
            Command::AddBirthday => &["name", "birthday"],
            Command::RemovePhone => &["name", "phone"],
            Command::Hello
            | Command::All
            | Command::Birthdays
            | Command::Exit
            | Command::Unknown => &[],
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "remove-phone" => Command::RemovePhone,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown,
        })
    }
}

/// Split an input line into its command and whitespace-separated arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.parse::<Command>().unwrap_or(Command::Unknown);
    let args = words.map(str::to_string).collect();
    Some((command, args))
}
