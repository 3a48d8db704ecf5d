use crate::calc::{calculate, Powers};
use crate::errors::PowerCalcError;
use crate::format::{write_error, write_header, write_powers, PROMPT};
use crate::input::parse_number;
use std::io::{BufRead, Write};
use termcolor::WriteColor;

pub struct SessionConfig {
    /// The value rendered when the session starts.
    pub start: i64,

    /// How far `+` and `-` move the value.
    pub step: i64,

    /// If this is true the `Enter an integer> ` prompt is written before every read.
    pub prompt: bool,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            start: 1,
            step: 1,
            prompt: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Set(i64),
    Increment,
    Decrement,
    Redraw,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, PowerCalcError> {
    match line.trim() {
        "" => Ok(Command::Redraw),
        "+" => Ok(Command::Increment),
        "-" => Ok(Command::Decrement),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => parse_number(other).map(Command::Set),
    }
}

/// The current value of the number field.
pub struct Session {
    value: i64,
    step: i64,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Session {
        Session {
            value: config.start,
            step: config.step,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Applies a command and returns the powers to display, or `None` once the session is over.
    /// A rejected command leaves the value as it was.
    pub fn apply(&mut self, command: Command) -> Result<Option<Powers>, PowerCalcError> {
        let next = match command {
            Command::Quit => return Ok(None),
            Command::Redraw => self.value,
            Command::Set(n) => n,
            Command::Increment => self.value.checked_add(self.step).ok_or(
                PowerCalcError::StepOverflow {
                    value: self.value,
                    step: self.step,
                    up: true,
                },
            )?,
            Command::Decrement => self.value.checked_sub(self.step).ok_or(
                PowerCalcError::StepOverflow {
                    value: self.value,
                    step: self.step,
                    up: false,
                },
            )?,
        };

        if next != self.value {
            tracing::debug!(from = self.value, to = next, "value changed");
        }
        self.value = next;
        Ok(Some(calculate(self.value)))
    }
}

/// Runs the interactive form until `quit` or end of input.
pub fn run_session(
    input: &mut dyn BufRead,
    output: &mut dyn WriteColor,
    config: &SessionConfig,
) -> anyhow::Result<()> {
    let mut session = Session::new(config);

    write_header(output)?;
    writeln!(output)?;
    write_powers(output, &calculate(session.value()))?;

    let mut bytes = Vec::new();
    loop {
        if config.prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            tracing::debug!("end of input");
            break;
        }

        // Undecodable lines are rejected like any other bad input.
        let command = std::str::from_utf8(&bytes)
            .map_err(|_| {
                PowerCalcError::InvalidNumber(String::from_utf8_lossy(&bytes).trim().to_string())
            })
            .and_then(parse_command);

        match command.and_then(|command| session.apply(command)) {
            Ok(Some(powers)) => write_powers(output, &powers)?,
            Ok(None) => break,
            Err(err) => {
                tracing::info!(error = %err, "rejected input");
                write_error(output, &err)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
