//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure and works out
//! which kind of evaluator the arguments ask for, using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the `mxe` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use macro_eval_cli::cli_args::{Args, Mode};
///
/// let args = Args::parse_from(["mxe", "--extension", "$(SolutionDir)out"]);
/// assert_eq!(args.get_mode(), Mode::Caching { extension: true });
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the YAML file describing the active solution and project.
    ///
    /// If not provided, defaults to `~/.macro-eval/context.yml`.
    /// A missing file means nothing is active.
    #[arg(long, short = 'c')]
    pub context_path: Option<String>,

    /// Also consult the extension resolver after the build context resolver.
    #[arg(long, short = 'e', action, conflicts_with = "platform_command")]
    pub extension: bool,

    /// Hand every input to this program instead of expanding macros locally.
    ///
    /// The program is run with the input as its last argument and its
    /// standard output is taken as the result.
    #[arg(long, short = 'p')]
    pub platform_command: Option<String>,

    /// Argument passed to the platform command before the input.
    ///
    /// Multiple arguments can be provided with repeated `-a` flags.
    #[arg(long = "platform-arg", short = 'a', requires = "platform_command", allow_hyphen_values = true)]
    pub platform_args: Vec<String>,

    /// Print the macro tokens found in each input instead of evaluating it.
    #[arg(long, short = 't', action)]
    pub list_tokens: bool,

    /// Strings to evaluate. If none are given, each line of stdin is evaluated.
    ///
    /// All inputs share one evaluator, so a macro is resolved at most once.
    pub inputs: Vec<String>,
}

/// The kind of evaluator requested on the command line.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Mode {
    /// Expand locally from the context file, caching resolved values
    Caching { extension: bool },
    /// Forward to an external platform command
    Delegating { program: String, args: Vec<String> },
}

impl Args {
    pub fn get_mode(&self) -> Mode {
        match &self.platform_command {
            Some(program) => Mode::Delegating {
                program: program.clone(),
                args: self.platform_args.clone(),
            },
            None => Mode::Caching {
                extension: self.extension,
            },
        }
    }
}
