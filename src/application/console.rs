//! Console writer with trace-level gated diagnostic lines
//!
//! Plain lines (`echo`) are always written. Diagnostic lines carry a leading token
//! and are written only when the trace level allows their category:
//!
//! ```text
//! >  routine         entering a routine            (level 1)
//! <  routine         leaving a routine             (level 1)
//! A[n]: value        routine argument              (level 1)
//! E: text            critical error                (level 1)
//! D: text            debugging text                (level 2)
//! V: name  = value   variable dump                 (level 2)
//! W: text            warning                       (level 2)
//! ```

use std::fmt::Display;
use std::io::Write;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{TraceCategory, TraceLevel};

pub struct Console<'a, W: Write + ?Sized> {
    out: &'a mut W,
    level: TraceLevel,
}

impl<'a, W: Write + ?Sized> Console<'a, W> {
    pub fn new(out: &'a mut W, level: TraceLevel) -> Self {
        Self { out, level }
    }

    /// Write a line regardless of trace level.
    pub fn echo(&mut self, text: impl Display) -> ApplicationResult<()> {
        writeln!(self.out, "{text}").with_context("write console line")
    }

    pub fn blank(&mut self) -> ApplicationResult<()> {
        self.echo("")
    }

    /// Write a diagnostic line if the current level allows `category`.
    pub fn trace(&mut self, category: TraceCategory, text: impl Display) -> ApplicationResult<()> {
        if !self.level.allows(category) {
            return Ok(());
        }
        writeln!(self.out, "{}{}", category.token(), text).with_context("write trace line")
    }

    pub fn enter(&mut self, routine: &str) -> ApplicationResult<()> {
        self.trace(TraceCategory::Enter, routine)
    }

    pub fn exit(&mut self, routine: &str) -> ApplicationResult<()> {
        self.trace(TraceCategory::Exit, routine)
    }

    /// `index` is 1-based, matching the parameter numbering on the command line.
    pub fn argument(&mut self, index: usize, value: &str) -> ApplicationResult<()> {
        self.trace(TraceCategory::Argument, format_args!("[{index}]: {value}"))
    }

    pub fn debug(&mut self, text: impl Display) -> ApplicationResult<()> {
        self.trace(TraceCategory::Debug, text)
    }

    pub fn variable(&mut self, name: &str, value: impl Display) -> ApplicationResult<()> {
        self.trace(TraceCategory::Variable, format_args!("{name:<18} = {value}"))
    }

    pub fn warning(&mut self, text: impl Display) -> ApplicationResult<()> {
        self.trace(TraceCategory::Warning, text)
    }

    pub fn error(&mut self, text: impl Display) -> ApplicationResult<()> {
        self.trace(TraceCategory::Error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(level: u32, write: impl FnOnce(&mut Console<'_, Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, TraceLevel::new(level));
        write(&mut console);
        String::from_utf8(buf).unwrap()
    }

    fn write_all_categories(console: &mut Console<'_, Vec<u8>>) {
        console.echo("plain").unwrap();
        console.enter("main").unwrap();
        console.argument(1, "foo").unwrap();
        console.error("boom").unwrap();
        console.debug("details").unwrap();
        console.variable("parameter1", "foo").unwrap();
        console.warning("careful").unwrap();
        console.exit("main").unwrap();
    }

    #[test]
    fn given_level_zero_when_writing_then_only_plain_lines() {
        let out = render(0, write_all_categories);
        assert_eq!(out, "plain\n");
    }

    #[test]
    fn given_level_one_when_writing_then_basic_lines_only() {
        let out = render(1, write_all_categories);
        assert_eq!(out, "plain\n>  main\nA[1]: foo\nE: boom\n<  main\n");
    }

    #[test]
    fn given_level_two_when_writing_then_all_lines() {
        let out = render(2, write_all_categories);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "plain",
                ">  main",
                "A[1]: foo",
                "E: boom",
                "D: details",
                "V: parameter1         = foo",
                "W: careful",
                "<  main",
            ]
        );
    }
}
