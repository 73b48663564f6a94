use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};
use crate::evaluator::PlatformEvaluator;

/// Platform evaluator backed by an external program.
///
/// Runs `program [args..] <input>` and takes the program's standard output,
/// minus one trailing line terminator, as the evaluated string.
#[derive(Debug, Clone)]
pub struct CommandPlatform {
    program: String,
    args: Vec<String>,
}

impl CommandPlatform {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Fixed arguments passed before the input string.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl PlatformEvaluator for CommandPlatform {
    type Error = Error;

    /// # Errors
    ///
    /// Returns an error if the program cannot be started, exits with a
    /// non-zero status, or prints something that is not UTF-8.
    fn evaluate(&self, input: &str) -> Result<String> {
        info!("Evaluating with platform command `{}`", self.program);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        if !output.status.success() {
            return Err(Error::SubProcessExit(output.status.code()));
        }

        let mut evaluated = String::from_utf8(output.stdout)
            .map_err(|_| Error::NonUtf8Output(self.program.clone()))?;

        if evaluated.ends_with('\n') {
            evaluated.pop();
            if evaluated.ends_with('\r') {
                evaluated.pop();
            }
        }

        Ok(evaluated)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::evaluator::{DelegatingEvaluator, Evaluator};

    #[test]
    fn test_command_output_is_returned_without_trailing_newline() {
        let platform = CommandPlatform::new("echo");
        assert_eq!(platform.evaluate("$(SolutionDir)").unwrap(), "$(SolutionDir)");
    }

    #[test]
    fn test_fixed_args_come_before_input() {
        let platform = CommandPlatform::new("sh").with_args(["-c", "printf 'got:%s' \"$0\""]);
        assert_eq!(platform.evaluate("$(Platform)").unwrap(), "got:$(Platform)");
    }

    #[test]
    fn test_only_one_trailing_newline_is_removed() {
        let platform = CommandPlatform::new("sh").with_args(["-c", "printf '%s\\n\\n' \"$0\""]);
        assert_eq!(platform.evaluate("x").unwrap(), "x\n");
    }

    #[test]
    fn test_non_zero_exit_is_an_error() {
        let platform = CommandPlatform::new("false");
        assert!(matches!(platform.evaluate("x"), Err(Error::SubProcessExit(Some(1)))));
    }

    #[test]
    fn test_exit_code_is_reported() {
        let platform = CommandPlatform::new("sh").with_args(["-c", "exit 3"]);
        let error = platform.evaluate("x").unwrap_err();

        assert!(matches!(error, Error::SubProcessExit(Some(3))));
        assert!(error.to_string().contains("(3)"));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let platform = CommandPlatform::new("this-program-does-not-exist-anywhere");
        assert!(matches!(platform.evaluate("x"), Err(Error::SubProcess(_))));
    }

    #[test]
    fn test_delegating_evaluator_passes_platform_error_through() {
        let mut evaluator = DelegatingEvaluator::new(CommandPlatform::new("false"));
        assert!(matches!(evaluator.evaluate("x"), Err(Error::SubProcessExit(Some(1)))));
    }
}
