//! Script runner: banner, help path, argument validation and diagnostics
//!
//! ```text
//! start ──help flag──────────────────────────► usage, exit 1
//!   └──► validate ──wrong count──────────────► usage, exit 1
//!                 └──two arguments──► print ──► exit 0
//! ```

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, Console};
use crate::config::Settings;
use crate::domain::{Invocation, ScriptParameters, SCRIPT_ATTRIBUTION};
use crate::exitcode;

#[derive(Debug, Clone)]
pub struct Runner {
    settings: Settings,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the script once and return its exit code.
    ///
    /// Console output, including trace lines, goes to `out`. Only failures to
    /// write to `out` are errors; the help path is a normal return of
    /// [`exitcode::FAILURE`].
    #[instrument(level = "debug", skip(self, out), fields(args = invocation.len()))]
    pub fn run<W: Write + ?Sized>(
        &self,
        invocation: &Invocation,
        out: &mut W,
    ) -> ApplicationResult<i32> {
        let level = self.settings.trace_level;
        let mut console = Console::new(out, level);

        self.show_banner(&mut console)?;

        if level.is_enabled() {
            console.echo(format_args!("\nDEBUGGING TURNED ON AT LEVEL: {level}\n"))?;
        }

        if invocation.is_help_request() {
            debug!("help requested via {:?}", invocation.args()[0]);
            let ignored = invocation.len() - 1;
            if ignored > 0 {
                console.warning(format_args!(
                    "{ignored} argument(s) after the help flag ignored"
                ))?;
            }
            self.show_help(&mut console)?;
            return Ok(exitcode::FAILURE);
        }

        let code = self.main(invocation, &mut console)?;

        console.debug(format_args!("Exit Code = {code}"))?;
        debug!(code, "run finished");
        Ok(code)
    }

    fn main<W: Write + ?Sized>(
        &self,
        invocation: &Invocation,
        console: &mut Console<'_, W>,
    ) -> ApplicationResult<i32> {
        console.enter("main")?;

        if !self.verify_arguments(invocation, console)? {
            self.show_help(console)?;
            console.exit("main (1)")?;
            return Ok(exitcode::FAILURE);
        }

        console.debug("Setting Script Parameters")?;
        let params = self.set_script_arguments(invocation, console)?;

        self.print_runtime_values(console)?;
        self.print_script_arguments(&params, console)?;

        console.exit("main (0)")?;
        Ok(exitcode::OK)
    }

    /// True if exactly two arguments were supplied.
    fn verify_arguments<W: Write + ?Sized>(
        &self,
        invocation: &Invocation,
        console: &mut Console<'_, W>,
    ) -> ApplicationResult<bool> {
        console.enter("verify_arguments")?;

        let verdict = match invocation.bind() {
            Ok(_) => true,
            Err(e) => {
                debug!("{e}");
                console.error(&e)?;
                false
            }
        };
        console.debug(format_args!("Number of Arguments = {}", invocation.len()))?;

        console.exit("verify_arguments")?;
        Ok(verdict)
    }

    fn set_script_arguments<W: Write + ?Sized>(
        &self,
        invocation: &Invocation,
        console: &mut Console<'_, W>,
    ) -> ApplicationResult<ScriptParameters> {
        console.enter("set_script_arguments")?;

        let params = invocation.bind()?;
        console.variable("parameter1", &params.parameter1)?;
        console.variable("parameter2", &params.parameter2)?;

        console.exit("set_script_arguments")?;
        Ok(params)
    }

    fn show_banner<W: Write + ?Sized>(&self, console: &mut Console<'_, W>) -> ApplicationResult<()> {
        let script = &self.settings.script;
        console.echo(format_args!(
            "\n{} - Version {}\n{}\n",
            script.name, script.version, SCRIPT_ATTRIBUTION
        ))
    }

    fn show_help<W: Write + ?Sized>(&self, console: &mut Console<'_, W>) -> ApplicationResult<()> {
        console.enter("show_help")?;
        console.echo(usage(&self.settings.script.name))?;
        console.exit("show_help")
    }

    fn print_runtime_values<W: Write + ?Sized>(
        &self,
        console: &mut Console<'_, W>,
    ) -> ApplicationResult<()> {
        console.enter("print_runtime_values")?;

        let script = &self.settings.script;
        section_header("Script Runtime Values", console)?;
        console.echo(field("Script Path", &script.path))?;
        console.echo(field("Script Name", &script.name))?;
        console.echo(field("Script Name No Ext", &script.name_no_ext))?;
        console.echo(field("Script Folder", &script.folder))?;
        console.echo(field("Script Version", &script.version))?;
        console.echo(field("Trace Level", self.settings.trace_level))?;
        console.echo("\n")?;

        console.exit("print_runtime_values")
    }

    fn print_script_arguments<W: Write + ?Sized>(
        &self,
        params: &ScriptParameters,
        console: &mut Console<'_, W>,
    ) -> ApplicationResult<()> {
        console.enter("print_script_arguments")?;
        console.argument(1, &params.parameter1)?;
        console.argument(2, &params.parameter2)?;

        section_header("Script Parameters", console)?;
        console.echo(field("Parameter 1", &params.parameter1))?;
        console.echo(field("Parameter 2", &params.parameter2))?;
        console.echo("\n")?;

        console.exit("print_script_arguments")
    }
}

/// Usage line for a script called `name`.
pub fn usage(name: &str) -> String {
    format!("Usage: {name} \"p1\" \"p2\"")
}

fn section_header<W: Write + ?Sized>(
    title: &str,
    console: &mut Console<'_, W>,
) -> ApplicationResult<()> {
    let rule = "=".repeat(title.len());
    console.blank()?;
    console.echo(&rule)?;
    console.echo(title)?;
    console.echo(&rule)
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {label:<22}: {value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScriptInfo, TraceLevel};

    fn runner(level: u32) -> Runner {
        Runner::new(Settings::new(
            TraceLevel::new(level),
            ScriptInfo::from_path("/opt/scripts/Template.js", "1.0"),
        ))
    }

    fn run(level: u32, args: &[&str]) -> (i32, String) {
        let mut out = Vec::new();
        let code = runner(level)
            .run(&Invocation::new(args.iter().copied()), &mut out)
            .unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn given_two_arguments_when_run_then_prints_blocks_and_exits_zero() {
        let (code, out) = run(0, &["foo", "bar"]);

        assert_eq!(code, exitcode::OK);
        assert!(out.starts_with("\nTemplate.js - Version 1.0\n"));
        assert!(out.contains("  Script Path           : /opt/scripts/Template.js\n"));
        assert!(out.contains("  Script Name No Ext    : Template\n"));
        assert!(out.contains("  Script Folder         : /opt/scripts/\n"));
        assert!(out.contains("  Trace Level           : 0\n"));
        assert!(out.contains("  Parameter 1           : foo\n"));
        assert!(out.contains("  Parameter 2           : bar\n"));
        assert!(!out.contains("Usage:"));
    }

    #[test]
    fn given_level_two_when_run_then_traces_in_call_order() {
        let (code, out) = run(2, &["foo", "bar"]);
        assert_eq!(code, exitcode::OK);

        let traces: Vec<&str> = out
            .lines()
            .filter(|l| {
                [">  ", "<  ", "A[", "D: ", "V: "]
                    .iter()
                    .any(|t| l.starts_with(t))
            })
            .collect();
        assert_eq!(
            traces,
            vec![
                ">  main",
                ">  verify_arguments",
                "D: Number of Arguments = 2",
                "<  verify_arguments",
                "D: Setting Script Parameters",
                ">  set_script_arguments",
                "V: parameter1         = foo",
                "V: parameter2         = bar",
                "<  set_script_arguments",
                ">  print_runtime_values",
                "<  print_runtime_values",
                ">  print_script_arguments",
                "A[1]: foo",
                "A[2]: bar",
                "<  print_script_arguments",
                "<  main (0)",
                "D: Exit Code = 0",
            ]
        );
        assert!(out.contains("DEBUGGING TURNED ON AT LEVEL: 2"));
    }

    #[test]
    fn given_help_flag_when_run_then_usage_without_main() {
        let (code, out) = run(1, &["/?", "foo", "bar"]);

        assert_eq!(code, exitcode::FAILURE);
        assert!(out.contains("Usage: Template.js \"p1\" \"p2\"\n"));
        assert!(out.contains(">  show_help\n"));
        assert!(!out.contains(">  main"));
        assert!(!out.contains("Parameter 1"));
    }

    #[test]
    fn given_one_argument_at_level_one_when_run_then_usage_inside_main() {
        let (code, out) = run(1, &["foo"]);

        assert_eq!(code, exitcode::FAILURE);
        assert!(out.contains("Usage: Template.js"));
        assert!(out.contains("<  main (1)\n"));
        assert!(!out.contains("D: "));
    }

    #[test]
    fn given_any_run_when_banner_printed_then_attribution_on_second_line() {
        let (_, out) = run(0, &["foo", "bar"]);
        let mut lines = out.lines().skip(1);

        assert_eq!(lines.next(), Some("Template.js - Version 1.0"));
        assert_eq!(lines.next(), Some(SCRIPT_ATTRIBUTION));
    }

    #[test]
    fn given_wrong_count_at_level_one_when_run_then_error_line() {
        let (_, out) = run(1, &["foo"]);
        assert!(out.contains("E: expected 2 arguments, got 1\n"));

        let (_, out) = run(0, &["foo"]);
        assert!(!out.contains("E: "));
    }

    #[test]
    fn given_help_flag_with_extra_args_at_level_two_when_run_then_warning_line() {
        let (_, out) = run(2, &["-help", "foo", "bar"]);
        assert!(out.contains("W: 2 argument(s) after the help flag ignored\n"));

        let (_, out) = run(1, &["-help", "foo", "bar"]);
        assert!(!out.contains("W: "));

        let (_, out) = run(2, &["-help"]);
        assert!(!out.contains("W: "));
    }

    #[test]
    fn given_failed_validation_at_level_two_when_run_then_exit_code_traced() {
        let (_, out) = run(2, &[]);
        assert!(out.contains("D: Number of Arguments = 0\n"));
        assert!(out.contains("D: Exit Code = 1\n"));
    }

    #[test]
    fn given_broken_sink_when_run_then_output_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = runner(0)
            .run(&Invocation::new(["foo", "bar"]), &mut Broken)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::application::ApplicationError::Output { .. }
        ));
    }
}
