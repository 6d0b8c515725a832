//! Line commands accepted by the terminal shell.
//!
//! Plain text is passed through; lines starting with `+`/`-` add a pro/con;
//! lines starting with `:` are commands. Indices typed by the user are
//! one-based and converted to zero-based here.

use thiserror::Error;

/// Parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Text(String),
    Pro(String),
    Con(String),
    AddOption,
    RenameOption(usize, String),
    RemoveOption(usize),
    RemovePro(usize),
    RemoveCon(usize),
    Factor(f64),
    Next,
    Prev,
    Back,
    History,
    Reset,
    Help,
    Quit,
}

/// Errors for lines that look like commands but are malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command ':{0}' (type :help)")]
    Unknown(String),

    #[error("':{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        if let Some(text) = line.strip_prefix('+') {
            return Ok(Command::Pro(text.trim().to_string()));
        }
        if let Some(text) = line.strip_prefix('-') {
            if !is_negative_number(line, text) {
                return Ok(Command::Con(text.trim().to_string()));
            }
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Text(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "add" => Ok(Command::AddOption),
            "rename" => {
                let (index, text) = arg.split_once(char::is_whitespace).ok_or(
                    CommandError::MissingArgument {
                        command: "rename",
                        what: "an option number and a name",
                    },
                )?;
                Ok(Command::RenameOption(parse_index(index)?, text.trim().to_string()))
            }
            "rm" => Ok(Command::RemoveOption(required_index("rm", arg)?)),
            "rm+" => Ok(Command::RemovePro(required_index("rm+", arg)?)),
            "rm-" => Ok(Command::RemoveCon(required_index("rm-", arg)?)),
            "factor" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "factor",
                        what: "a value",
                    });
                }
                arg.parse::<f64>()
                    .map(Command::Factor)
                    .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
            }
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "back" | "b" => Ok(Command::Back),
            "history" | "h" => Ok(Command::History),
            "new" | "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// A line such as `-3` or `-.5` is text, not a con. `-nan`, `-inf` and
/// `- 5` stay cons.
fn is_negative_number(line: &str, after_dash: &str) -> bool {
    after_dash.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && line.parse::<f64>().map_or(false, f64::is_finite)
}

/// Parses a one-based index into a zero-based one.
pub fn parse_index(text: &str) -> Result<usize, CommandError> {
    match text.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidNumber(text.trim().to_string())),
    }
}

fn required_index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a number",
        });
    }
    parse_index(arg)
}

pub const HELP: &str = "\
Commands:
  <text>              title, option name, or history entry number
  + <text>            add a pro to the current option
  - <text>            add a con to the current option
  :add                add an empty option row
  :rename N <name>    rename option N
  :rm N               remove option N (at least two rows stay)
  :rm+ N / :rm- N     remove pro / con N
  :factor X           set regret sensitivity
  :next  :back        move through the steps
  :prev               go to the previous option
  :history            list past decisions (from the start screen)
  :new                start over with a fresh decision
  :quit               leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_text() {
        assert_eq!(Command::parse("  Laptop  "), Ok(Command::Text("Laptop".into())));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
    }

    #[test]
    fn parses_pros_and_cons() {
        assert_eq!(Command::parse("+ Saves money"), Ok(Command::Pro("Saves money".into())));
        assert_eq!(Command::parse("-short battery"), Ok(Command::Con("short battery".into())));
    }

    #[test]
    fn negative_number_is_text() {
        assert_eq!(Command::parse("-3"), Ok(Command::Text("-3".into())));
        assert_eq!(Command::parse("-0.5"), Ok(Command::Text("-0.5".into())));
        assert_eq!(Command::parse("-.5"), Ok(Command::Text("-.5".into())));
    }

    #[test]
    fn dash_words_and_spaced_numbers_are_cons() {
        assert_eq!(Command::parse("-nan"), Ok(Command::Con("nan".into())));
        assert_eq!(Command::parse("-inf"), Ok(Command::Con("inf".into())));
        assert_eq!(Command::parse("-infinity"), Ok(Command::Con("infinity".into())));
        assert_eq!(Command::parse("- 5"), Ok(Command::Con("5".into())));
        assert_eq!(Command::parse("-3 flights"), Ok(Command::Con("3 flights".into())));
    }

    #[test]
    fn parses_indexed_commands_as_zero_based() {
        assert_eq!(Command::parse(":rm 3"), Ok(Command::RemoveOption(2)));
        assert_eq!(Command::parse(":rm+ 1"), Ok(Command::RemovePro(0)));
        assert_eq!(Command::parse(":rm- 2"), Ok(Command::RemoveCon(1)));
        assert_eq!(
            Command::parse(":rename 2 Electric bike"),
            Ok(Command::RenameOption(1, "Electric bike".into()))
        );
    }

    #[test]
    fn rejects_zero_and_garbage_indices() {
        assert_eq!(Command::parse(":rm 0"), Err(CommandError::InvalidNumber("0".into())));
        assert!(Command::parse(":rm+ x").is_err());
        assert!(matches!(
            Command::parse(":rm"),
            Err(CommandError::MissingArgument { command: "rm", .. })
        ));
    }

    #[test]
    fn parses_factor() {
        assert_eq!(Command::parse(":factor 3.5"), Ok(Command::Factor(3.5)));
        assert!(Command::parse(":factor high").is_err());
        assert!(Command::parse(":factor").is_err());
    }

    #[test]
    fn parses_navigation_aliases() {
        assert_eq!(Command::parse(":n"), Ok(Command::Next));
        assert_eq!(Command::parse(":back"), Ok(Command::Back));
        assert_eq!(Command::parse(":prev"), Ok(Command::Prev));
        assert_eq!(Command::parse(":p"), Ok(Command::Prev));
        assert_eq!(Command::parse(":h"), Ok(Command::History));
        assert_eq!(Command::parse(":new"), Ok(Command::Reset));
        assert_eq!(Command::parse(":q"), Ok(Command::Quit));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            Command::parse(":launch"),
            Err(CommandError::Unknown("launch".into()))
        );
    }
}
