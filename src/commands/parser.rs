//! Input line parsing.

/// A command word typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, including an empty line
    Unknown(String),
}

impl From<&str> for Command {
    fn from(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Split a line on whitespace into a command and its arguments.
///
/// The command word is matched case-insensitively; arguments keep their case.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().map_or(Command::Unknown(String::new()), Command::from);
    (command, parts.map(str::to_string).collect())
}
