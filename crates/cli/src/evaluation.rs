//! Running inputs through an evaluator and writing the results.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;
use macro_eval_core::error::{Error, Result};
use macro_eval_core::evaluator::Evaluator;
use macro_eval_core::token::token_set;

/// Collects the strings to evaluate.
///
/// Inputs given on the command line win; otherwise every line of `reader` is
/// an input, with its line terminator stripped.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn gather_inputs<R: BufRead>(inputs: &[String], reader: R) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs.to_vec());
    }

    debug!("No inputs on the command line, reading stdin");
    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(Error::Stdio)
}

/// Evaluates each input in order with one evaluator, one output line each.
///
/// # Errors
///
/// Returns the evaluator's error for the first input it fails on, or an
/// error if writing fails.
pub fn evaluate_inputs<E, W>(evaluator: &mut E, inputs: &[String], mut out: W) -> Result<()>
where
    E: Evaluator,
    E::Error: Into<Error>,
    W: Write,
{
    for input in inputs {
        let evaluated = evaluator.evaluate(input).map_err(Into::into)?;
        writeln!(out, "{evaluated}").map_err(Error::Stdio)?;
    }

    Ok(())
}

/// Writes the unique macro tokens of each input, space separated, one line per input.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list_tokens<W: Write>(inputs: &[String], mut out: W) -> Result<()> {
    for input in inputs {
        writeln!(out, "{}", token_set(input).iter().join(" ")).map_err(Error::Stdio)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use macro_eval_core::evaluator::CachingEvaluator;
    use macro_eval_core::resolver::FnResolver;

    use super::*;

    #[test]
    fn test_gather_inputs_prefers_arguments() {
        let inputs = vec!["$(A)".to_string()];
        let gathered = gather_inputs(&inputs, Cursor::new("ignored\n")).unwrap();
        assert_eq!(gathered, inputs);
    }

    #[test]
    fn test_gather_inputs_reads_lines() {
        let gathered = gather_inputs(&[], Cursor::new("one\r\n$(Two)\n\nthree")).unwrap();
        assert_eq!(gathered, vec!["one", "$(Two)", "", "three"]);
    }

    #[test]
    fn test_evaluate_inputs_writes_one_line_each() {
        let mut evaluator = CachingEvaluator::new(FnResolver(|token: &str| {
            (token == "$(A)").then(|| "a".to_string())
        }));
        let inputs = vec!["$(A)/x".to_string(), "$(B)".to_string()];
        let mut out = Vec::new();

        evaluate_inputs(&mut evaluator, &inputs, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a/x\n$(B)\n");
        assert_eq!(evaluator.cache_len(), 1);
    }

    #[test]
    fn test_list_tokens() {
        let inputs = vec![
            "$(SolutionDir)$(Configuration)/$(SolutionDir)".to_string(),
            "plain".to_string(),
        ];
        let mut out = Vec::new();

        list_tokens(&inputs, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "$(SolutionDir) $(Configuration)\n\n"
        );
    }
}
