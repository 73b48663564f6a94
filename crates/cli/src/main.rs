use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use macro_eval_core::config;
use macro_eval_core::error::Result;
use macro_eval_core::evaluator::{CachingEvaluator, DelegatingEvaluator};
use macro_eval_core::file_handling;
use macro_eval_core::platform::CommandPlatform;
use macro_eval_core::resolver::ResolverChain;
use macro_eval_core::resolvers::{BuildContextResolver, ExtensionResolver};

use macro_eval_cli::cli_args::{Args, Mode};
use macro_eval_cli::evaluation::{evaluate_inputs, gather_inputs, list_tokens};

fn execute() -> Result<()> {
    let args = Args::parse();

    let inputs = gather_inputs(&args.inputs, stdin().lock())?;
    let out = stdout().lock();

    if args.list_tokens {
        return list_tokens(&inputs, out);
    }

    match args.get_mode() {
        Mode::Caching { extension } => {
            let context_path = config::get_context_path(&args.context_path);
            debug!("Context path: `{}`", context_path);

            let context = file_handling::get_context(&context_path)?;
            let mut chain = ResolverChain::new().with(BuildContextResolver::new(context));
            if extension {
                chain = chain.with(ExtensionResolver);
            }

            evaluate_inputs(&mut CachingEvaluator::new(chain), &inputs, out)
        }
        Mode::Delegating {
            program,
            args: platform_args,
        } => {
            let platform = CommandPlatform::new(program).with_args(platform_args);
            evaluate_inputs(&mut DelegatingEvaluator::new(platform), &inputs, out)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
