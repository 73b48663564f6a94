//! Macro Eval CLI Library
//!
//! This crate provides the `mxe` command-line host for macro-eval. It reads
//! the active solution and project from a context file (or defers to an
//! external platform evaluator) and prints the expanded form of each input.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and evaluator mode selection
//! - [`evaluation`]: Gathering inputs and writing evaluated output
//!
//! # Examples
//!
//! ```bash
//! # Expand using ~/.macro-eval/context.yml
//! mxe '$(SolutionDir)bin/$(Configuration)-$(Platform)'
//!
//! # Expand every line of a file with a specific context
//! mxe -c ./context.yml < include_dirs.txt
//!
//! # Show which macros a string uses
//! mxe --list-tokens '$(ProjectDir)$(OutDir)'
//!
//! # Defer to an external evaluator
//! mxe -p msbuild-eval -a --project -a App.vcxproj '$(OutDir)'
//! ```

pub mod cli_args;
pub mod evaluation;
