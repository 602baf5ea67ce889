//! Console output for the booking session
//!
//! The formatter is cheap to clone and every clone writes to the same sink,
//! so background notification tasks can print alongside the session loop
//! without interleaving within a line.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Output formatter for text or JSON lines
#[derive(Clone)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
    out: Sink,
    err: Sink,
}

impl std::fmt::Debug for OutputFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputFormatter")
            .field("json", &self.json)
            .field("no_color", &self.no_color)
            .finish_non_exhaustive()
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl OutputFormatter {
    /// Create a formatter writing to stdout and stderr
    pub fn new(json: bool, no_color: bool) -> Self {
        Self {
            json,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
            out: Arc::new(Mutex::new(Box::new(io::stdout()))),
            err: Arc::new(Mutex::new(Box::new(io::stderr()))),
        }
    }

    /// Create an uncolored formatter sending everything to one writer
    pub fn with_writer(json: bool, writer: impl Write + Send + 'static) -> Self {
        let sink: Sink = Arc::new(Mutex::new(Box::new(writer)));
        Self {
            json,
            no_color: true,
            out: Arc::clone(&sink),
            err: sink,
        }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    fn write_line(sink: &Sink, line: &str) {
        let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed stdout (e.g. `| head`) is not worth aborting a booking over
        let _ = writeln!(writer, "{line}").and_then(|()| writer.flush());
    }

    fn paint(&self, text: &str, style: fn(&str) -> colored::ColoredString) -> String {
        if self.no_color {
            text.to_string()
        } else {
            style(text).to_string()
        }
    }

    /// Plain text line; suppressed in JSON mode
    pub fn print(&self, message: &str) {
        if !self.json {
            Self::write_line(&self.out, message);
        }
    }

    /// Success message
    pub fn success(&self, message: &str) {
        if !self.json {
            Self::write_line(&self.out, &self.paint(message, |s| s.green()));
        }
    }

    /// Informational message
    pub fn info(&self, message: &str) {
        if !self.json {
            Self::write_line(&self.out, &self.paint(message, |s| s.cyan()));
        }
    }

    /// Warning message
    pub fn warning(&self, message: &str) {
        if !self.json {
            Self::write_line(&self.out, &self.paint(message, |s| s.yellow()));
        }
    }

    /// Error message, always written to the error stream
    pub fn error(&self, message: &str) {
        Self::write_line(&self.err, &self.paint(message, |s| s.red().bold()));
    }

    /// Horizontal rule used between session sections
    pub fn rule(&self, ch: char) {
        self.print(&ch.to_string().repeat(50));
    }

    /// Write a value as one JSON line; only in JSON mode
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.json {
            self.print_json(value)?;
        }
        Ok(())
    }

    /// Write a value as one JSON line regardless of mode
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value)?;
        Self::write_line(&self.out, &line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SharedBuffer;

    #[test]
    fn test_text_mode_writes_messages() {
        let buffer = SharedBuffer::new();
        let output = OutputFormatter::with_writer(false, buffer.clone());

        output.success("booked");
        output.info("hello");
        output.error("bad");
        output.rule('=');

        let text = buffer.contents();
        assert_eq!(
            text,
            format!("booked\nhello\nbad\n{}\n", "=".repeat(50))
        );
    }

    #[test]
    fn test_json_mode_suppresses_text() {
        let buffer = SharedBuffer::new();
        let output = OutputFormatter::with_writer(true, buffer.clone());

        output.success("booked");
        output
            .json(&serde_json::json!({ "event": "sold_out" }))
            .unwrap();

        assert_eq!(buffer.contents(), "{\"event\":\"sold_out\"}\n");
    }

    #[test]
    fn test_clones_share_sink() {
        let buffer = SharedBuffer::new();
        let output = OutputFormatter::with_writer(false, buffer.clone());
        let clone = output.clone();

        output.print("one");
        clone.print("two");

        assert_eq!(buffer.lines(), vec!["one", "two"]);
    }
}
