#![forbid(unsafe_code)]

//! Human-readable formatter for planned commands

use crate::dispatch::CommandLine;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter
///
/// Prints the selected mode, the working directory and extra environment
/// when set, the command line itself, and any argument that was accepted
/// but dropped.
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the plan for one command
    pub fn write<W: WriteColor>(
        &self,
        out: &mut W,
        command: &CommandLine,
        ignored: &[String],
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{}", command.mode)?;
        out.reset()?;
        writeln!(out, " evaluation")?;

        if let Some(dir) = &command.working_dir {
            writeln!(out, "  cwd: {}", dir.display())?;
        }
        for (key, value) in &command.env {
            writeln!(out, "  env: {}={}", key, value)?;
        }

        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "  $")?;
        out.reset()?;
        writeln!(out, " {}", command)?;

        if !ignored.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "  ignored:")?;
            out.reset()?;
            writeln!(out, " {}", ignored.join(" "))?;
        }

        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchConfig;
    use crate::dispatch::Invocation;
    use termcolor::Buffer;

    fn render(args: &[&str], config: &DispatchConfig, buffer: &mut Buffer) {
        let inv = Invocation::parse(args).unwrap();
        let cmd = CommandLine::build(&inv, config);
        HumanFormatter::new()
            .write(buffer, &cmd, inv.ignored())
            .unwrap();
    }

    #[test]
    fn test_full_plan_lists_ignored_argument() {
        let mut buffer = Buffer::no_color();
        render(&["cfgX", "/ckpt/path.pth", "unused"], &DispatchConfig::default(), &mut buffer);
        let text = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(text.starts_with("full evaluation\n"));
        assert!(text.contains("  $ python -u habitat_baselines/run.py --run-type eval"));
        assert!(text.ends_with("  ignored: unused\n"));
    }

    #[test]
    fn test_extended_plan_has_no_ignored_line() {
        let mut buffer = Buffer::no_color();
        render(&["c", "s", "1", "--x"], &DispatchConfig::default(), &mut buffer);
        let text = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(text.starts_with("extended evaluation\n"));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn test_env_and_cwd_lines() {
        let config = DispatchConfig::parse(
            "[dispatch]\nworking_dir = \"/w\"\n[environment.vars]\nB = \"2\"\nA = \"1\"\n",
        )
        .unwrap();
        let mut buffer = Buffer::no_color();
        render(&["c", "s", "1", "--x"], &config, &mut buffer);
        let text = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(text.contains("  cwd: /w\n  env: A=1\n  env: B=2\n"));
    }

    #[test]
    fn test_ansi_buffer_gets_color() {
        let mut buffer = Buffer::ansi();
        render(&["c", "p", "x"], &DispatchConfig::default(), &mut buffer);
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
    }
}
