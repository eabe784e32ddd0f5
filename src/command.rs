use std::str::FromStr;

use crate::error::EditError;

/// A single parsed sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Select { start: usize, end: usize },
    MoveCursor(isize),
    Copy,
    Paste(usize),
    Exit,
    /// Anything we do not recognise. Dispatch ignores it.
    Unknown(String),
}

impl Command {
    /// Parse a command string like `TYPE hello` or `SELECT 0 4`.
    ///
    /// The operation is split off at the first space; the rest is the
    /// argument, kept verbatim for `TYPE`.
    pub fn parse(input: &str) -> Result<Self, EditError> {
        let (operation, argument) = match input.split_once(' ') {
            Some((op, arg)) => (op, Some(arg)),
            None => (input, None),
        };

        let command = match operation {
            "TYPE" => Command::Type(argument.unwrap_or_default().to_string()),
            "SELECT" => {
                let raw = argument.unwrap_or_default();
                let mut parts = raw.split_whitespace();
                let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(malformed("SELECT", "two indices", raw));
                };
                Command::Select {
                    start: parse_number("SELECT", "two indices", start, raw)?,
                    end: parse_number("SELECT", "two indices", end, raw)?,
                }
            }
            "MOVE_CURSOR" => {
                let raw = argument.unwrap_or_default();
                Command::MoveCursor(parse_number("MOVE_CURSOR", "a signed offset", raw.trim(), raw)?)
            }
            "COPY" => Command::Copy,
            "PASTE" => match argument.map(str::trim).filter(|arg| !arg.is_empty()) {
                None => Command::Paste(1),
                Some(arg) => Command::Paste(parse_number("PASTE", "a step count", arg, arg)?),
            },
            "EXIT" => Command::Exit,
            _ => Command::Unknown(operation.to_string()),
        };

        Ok(command)
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Type(_) => "TYPE",
            Command::Select { .. } => "SELECT",
            Command::MoveCursor(_) => "MOVE_CURSOR",
            Command::Copy => "COPY",
            Command::Paste(_) => "PASTE",
            Command::Exit => "EXIT",
            Command::Unknown(op) => op,
        }
    }
}

/// The quoted segments of an input line, in order.
///
/// A line is split on `"` and every odd-indexed piece is a command, so
/// `"TYPE a" junk "COPY"` yields `TYPE a` and `COPY`.
pub fn split_commands(line: &str) -> impl Iterator<Item = &str> {
    line.split('"').skip(1).step_by(2)
}

fn parse_number<T: FromStr>(
    operation: &'static str,
    expected: &'static str,
    token: &str,
    raw: &str,
) -> Result<T, EditError> {
    token.parse().map_err(|_| malformed(operation, expected, raw))
}

fn malformed(operation: &'static str, expected: &'static str, raw: &str) -> EditError {
    EditError::MalformedNumericArgument {
        operation,
        expected,
        argument: raw.to_string(),
    }
}
