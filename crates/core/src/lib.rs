//! Macro Eval Core Library
//!
//! This crate expands build macros such as `$(SolutionDir)` or
//! `$(Configuration)` in arbitrary strings.
//!
//! # Key Features
//!
//! - **Token Scanning**: Find `$(Name)` tokens and their positions
//! - **Caching Evaluation**: Substitute resolved values and memoize them per evaluator
//! - **Pluggable Resolvers**: Resolve tokens from a host build/IDE context, or from your own source
//! - **Platform Delegation**: Hand evaluation to an authoritative external evaluator
//! - **Context Files**: Describe the active solution and project in YAML
//!
//! # Examples
//!
//! Expanding macros from a context file:
//!
//! ```no_run
//! use macro_eval_core::evaluator::CachingEvaluator;
//! use macro_eval_core::file_handling::get_context;
//! use macro_eval_core::resolvers::BuildContextResolver;
//!
//! let context = get_context("/home/me/.macro-eval/context.yml")?;
//! let mut evaluator = CachingEvaluator::new(BuildContextResolver::new(context));
//!
//! println!("{}", evaluator.expand("$(SolutionDir)bin/$(Configuration)"));
//! # Ok::<(), macro_eval_core::error::Error>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod file_handling;
pub mod platform;
pub mod resolver;
pub mod resolvers;
pub mod token;
