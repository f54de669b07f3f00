//! Interactive prompts.

use std::io::{BufRead, Write};

use tracing::warn;

use rotbench_core::error::RotateError;
use rotbench_orchestration::interfaces::InputSource;

/// Reads integers line by line, writing a prompt before each.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `message` and block until a line (or end of input) arrives.
    pub fn wait_for_key(&mut self, message: &str) -> Result<(), RotateError> {
        writeln!(self.writer).map_err(io_error)?;
        write!(self.writer, "{message}").map_err(io_error)?;
        self.writer.flush().map_err(io_error)?;
        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(io_error)?;
        Ok(())
    }

    /// Consume the prompter and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> InputSource for Prompter<R, W> {
    fn read_integer(&mut self, field: &str, default: i64) -> Result<i64, RotateError> {
        write!(self.writer, "Enter {field}: ").map_err(io_error)?;
        self.writer.flush().map_err(io_error)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(io_error)? == 0 {
            warn!(field, default, "end of input, using default");
            return Ok(default);
        }
        let value = line.trim();
        value.parse::<i64>().map_err(|_| RotateError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[allow(clippy::needless_pass_by_value)]
fn io_error(e: std::io::Error) -> RotateError {
    RotateError::Io(e.to_string())
}
