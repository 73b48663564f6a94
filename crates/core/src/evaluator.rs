//! Macro evaluators.
//!
//! [`CachingEvaluator`] scans a string for `$(Name)` tokens and replaces each
//! one it can resolve, remembering every resolved value for the rest of its
//! life. [`DelegatingEvaluator`] hands the whole string to an external
//! [`PlatformEvaluator`] and does nothing else.

use std::collections::HashMap;
use std::convert::Infallible;

use log::{debug, trace};

use crate::resolver::MacroResolver;
use crate::token::find_tokens;

/// Anything that can expand the macros in a string.
pub trait Evaluator {
    type Error;

    fn evaluate(&mut self, input: &str) -> Result<String, Self::Error>;
}

/// An authoritative evaluator owned by the surrounding build system.
pub trait PlatformEvaluator {
    type Error;

    fn evaluate(&self, input: &str) -> Result<String, Self::Error>;
}

/// Expands macros with a [`MacroResolver`] and memoizes resolved values.
///
/// The first time a token resolves, its value is cached under the literal
/// token text and reused for every later occurrence, even if the resolver
/// would answer differently by then. Tokens the resolver does not know are
/// left in the output untouched and are not cached, so they are asked for
/// again on the next call.
///
/// # Examples
///
/// ```
/// use macro_eval_core::evaluator::CachingEvaluator;
/// use macro_eval_core::resolver::FnResolver;
///
/// let mut evaluator = CachingEvaluator::new(FnResolver(|token: &str| match token {
///     "$(Configuration)" => Some("Debug".to_string()),
///     _ => None,
/// }));
///
/// assert_eq!(evaluator.expand("bin/$(Configuration)/$(Other)"), "bin/Debug/$(Other)");
/// assert_eq!(evaluator.cached("$(Configuration)"), Some("Debug"));
/// assert_eq!(evaluator.cached("$(Other)"), None);
/// ```
#[derive(Debug)]
pub struct CachingEvaluator<R> {
    resolver: R,
    cache: HashMap<String, String>,
}

impl<R: MacroResolver> CachingEvaluator<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            cache: HashMap::new(),
        }
    }

    /// Replaces every resolvable macro token in `input`.
    ///
    /// Substituted values are not scanned again, so a value that itself looks
    /// like a macro token ends up in the output as is. This never fails;
    /// [`Evaluator::evaluate`] wraps the same result in `Ok`.
    pub fn expand(&mut self, input: &str) -> String {
        let tokens = find_tokens(input);
        if tokens.is_empty() {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        let mut copied_up_to = 0;

        for token in &tokens {
            output.push_str(&input[copied_up_to..token.start]);

            match self.lookup(&token.text) {
                Some(value) => output.push_str(value),
                None => output.push_str(&token.text),
            }

            copied_up_to = token.end;
        }

        output.push_str(&input[copied_up_to..]);
        output
    }

    fn lookup(&mut self, token: &str) -> Option<&str> {
        if self.cache.contains_key(token) {
            trace!("Cache hit for `{}`", token);
        } else {
            let Some(value) = self.resolver.compute_macro(token) else {
                trace!("Leaving `{}` unresolved", token);
                return None;
            };

            debug!("Resolved `{}` to `{}`", token, value);
            self.cache.insert(token.to_string(), value);
        }

        self.cache.get(token).map(String::as_str)
    }

    /// Cached value of `token`, if it has been resolved before.
    pub fn cached(&self, token: &str) -> Option<&str> {
        self.cache.get(token).map(String::as_str)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cache_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: MacroResolver> Evaluator for CachingEvaluator<R> {
    type Error = Infallible;

    fn evaluate(&mut self, input: &str) -> Result<String, Self::Error> {
        Ok(self.expand(input))
    }
}

/// Forwards evaluation to a [`PlatformEvaluator`] untouched.
///
/// Whatever the platform returns, value or error, is returned as is.
#[derive(Debug, Clone)]
pub struct DelegatingEvaluator<P> {
    platform: P,
}

impl<P: PlatformEvaluator> DelegatingEvaluator<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: PlatformEvaluator> Evaluator for DelegatingEvaluator<P> {
    type Error = P::Error;

    fn evaluate(&mut self, input: &str) -> Result<String, Self::Error> {
        self.platform.evaluate(input)
    }
}
