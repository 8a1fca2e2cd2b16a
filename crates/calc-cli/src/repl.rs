//! Read-eval-print loop
//!
//! Feeds one input line at a time to the calculator and renders the stack
//! after every line.

use std::io::{BufRead, Write};

use calc_core::Calculator;
use log::{debug, warn};

use crate::command::{Command, CommandError, HELP};

const PROMPT: &str = "\n> ";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    calc: Calculator,
    quiet: bool,
}

impl Repl {
    pub fn new(calc: Calculator, quiet: bool) -> Self {
        Repl { calc, quiet }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Run until `quit` or end of input.
    ///
    /// Only console failures end the loop with an error; bad input and
    /// failed operations are reported on `err` and the loop goes on.
    /// Lines are read as raw bytes; bytes that are not UTF-8 fail to parse
    /// like any other malformed literal.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> Result<(), CommandError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        self.prompt(out)?;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let line = String::from_utf8_lossy(bytes);

            match self.execute(&line, out) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => (),
                Err(CommandError::Io(e)) => return Err(CommandError::Io(e)),
                Err(e) => {
                    warn!("'{}' rejected: {}", line, e);
                    writeln!(err, "{}", e)?;
                }
            }

            self.prompt(out)?;
        }
        Ok(())
    }

    /// Apply a single line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, CommandError> {
        let command = Command::parse(line)?;
        debug!("{:?}", command);

        match command {
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Operate(op) => self.calc.operate(op)?,
            Command::Pop => {
                if self.calc.count() > 0 {
                    self.calc.pop()?;
                }
            }
            Command::Empty => {
                let removed = self.calc.remove(0);
                debug!("emptied {} value(s)", removed);
            }
            Command::Push(value) => self.calc.push(value)?,
        }
        Ok(Flow::Continue)
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if self.quiet {
            return Ok(());
        }
        write!(out, "stack:")?;
        if !self.calc.is_empty() {
            write!(out, " {}", self.calc.stack())?;
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{CalcError, Value};
    use pretty_assertions::assert_eq;

    fn run(capacity: usize, input: &str) -> (Repl, String, String) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut repl = Repl::new(Calculator::new(capacity).unwrap(), false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        repl.run(input.as_bytes(), &mut out, &mut err).expect("repl failed");
        (
            repl,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn values(repl: &Repl) -> Vec<Value> {
        repl.calculator().iter().copied().collect()
    }

    #[test]
    fn renders_after_each_line() {
        let (repl, out, err) = run(8, "1\n2\n+\n");
        assert_eq!(out, "stack:\n> stack: 1\n> stack: 1 2\n> stack: 3\n> ");
        assert_eq!(err, "");
        assert_eq!(values(&repl), vec![3]);
    }

    #[test]
    fn quit_stops_reading() {
        let (repl, out, _) = run(8, "5\nquit\n6\n");
        assert_eq!(out, "stack:\n> stack: 5\n> ");
        assert_eq!(values(&repl), vec![5]);
    }

    #[test]
    fn bad_literals_are_reported() {
        let (repl, _, err) = run(8, "12x\n99999999999999999999\n7\n");
        assert_eq!(
            err,
            "unable to parse command.\ninteger is out of range.\n"
        );
        assert_eq!(values(&repl), vec![7]);
    }

    #[test]
    fn engine_errors_are_reported() {
        let (repl, _, err) = run(8, "1\n0\n/\n-4\nsqrt\n");
        assert_eq!(
            err,
            format!(
                "{}\n{}\n",
                CalcError::DivisionByZero { op: calc_core::Operation::Divide },
                CalcError::Domain { value: -4 }
            )
        );
        assert_eq!(values(&repl), vec![1, 0, -4]);
    }

    #[test]
    fn pop_and_empty() {
        let (repl, _, err) = run(8, "pop\n1\n2\n3\npop\nempty\n4\n");
        assert_eq!(err, "");
        assert_eq!(values(&repl), vec![4]);
    }

    #[test]
    fn full_stack_rejects_push() {
        let (repl, _, err) = run(1, "1\n2\n");
        assert_eq!(err, "stack is full (1 values)\n");
        assert_eq!(values(&repl), vec![1]);
    }

    #[test]
    fn crlf_lines() {
        let (repl, _, err) = run(8, "6\r\n7\r\n*\r\n");
        assert_eq!(err, "");
        assert_eq!(values(&repl), vec![42]);
    }

    #[test]
    fn help_lists_commands() {
        let (_, out, _) = run(8, "help\n");
        assert!(out.contains(HELP));
    }

    #[test]
    fn invalid_utf8_line_is_a_parse_error() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut repl = Repl::new(Calculator::new(4).unwrap(), true);
        let mut out = Vec::new();
        let mut err = Vec::new();
        repl.run(&b"1\n\xff\n2\n"[..], &mut out, &mut err)
            .expect("repl failed");
        assert_eq!(String::from_utf8(err).unwrap(), "unable to parse command.\n");
        assert_eq!(values(&repl), vec![1, 2]);
    }

    #[test]
    fn last_line_without_newline() {
        let (repl, out, _) = run(8, "3\n4");
        assert_eq!(out, "stack:\n> stack: 3\n> stack: 3 4\n> ");
        assert_eq!(values(&repl), vec![3, 4]);
    }

    #[test]
    fn quiet_prints_nothing() {
        let mut repl = Repl::new(Calculator::new(4).unwrap(), true);
        let mut out = Vec::new();
        let mut err = Vec::new();
        repl.run("1\n2\n<<\n".as_bytes(), &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert_eq!(values(&repl), vec![4]);
    }
}
