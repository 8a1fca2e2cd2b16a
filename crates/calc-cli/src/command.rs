//! Input line parsing
//!
//! One line of input is one command: a keyword, an operator symbol or a
//! base-10 integer literal.

use std::num::IntErrorKind;

use calc_core::{CalcError, Operation, Value};
use thiserror::Error;

pub const HELP: &str = "commands:
help                this help
+                   add
-                   substract
*                   multiply
/                   divide
%                   modulo
sqrt                square root
<<                  left shift
>>                  right shift
pop                 pop a value from the stack
a number            push number on the stack
empty               empty the stack
quit                quit application
";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unable to parse command.")]
    Parse(String),
    #[error("integer is out of range.")]
    OutOfRange(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("failed to read or write the console: '{0}'")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Operate(Operation),
    Pop,
    Empty,
    Push(Value),
}

impl Command {
    /// Parse a line with its terminator already stripped
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        match line {
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            "pop" => Ok(Command::Pop),
            "empty" => Ok(Command::Empty),
            _ => match line.parse::<Operation>() {
                Ok(op) => Ok(Command::Operate(op)),
                Err(_) => parse_literal(line).map(Command::Push),
            },
        }
    }
}

fn parse_literal(line: &str) -> Result<Value, CommandError> {
    line.trim_start().parse::<Value>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CommandError::OutOfRange(line.to_string())
        }
        _ => CommandError::Parse(line.to_string()),
    })
}
