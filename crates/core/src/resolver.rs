//! The macro resolution contract.
//!
//! A resolver maps a literal macro token such as `$(SolutionDir)` to its
//! value, or returns `None` when it does not know the token or the state it
//! needs is not available right now. Evaluators cache whatever a resolver
//! returns, so a resolver must give the same answer for the same token for
//! the length of one evaluation session.

pub trait MacroResolver {
    /// Computes the value of `token`, delimiters included.
    fn compute_macro(&self, token: &str) -> Option<String>;
}

/// Adapts a plain function or closure into a resolver.
///
/// # Examples
///
/// ```
/// use macro_eval_core::resolver::{FnResolver, MacroResolver};
///
/// let resolver = FnResolver(|token: &str| (token == "$(Root)").then(|| "/".to_string()));
/// assert_eq!(resolver.compute_macro("$(Root)"), Some("/".to_string()));
/// assert_eq!(resolver.compute_macro("$(Other)"), None);
/// ```
pub struct FnResolver<F>(pub F);

impl<F> MacroResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn compute_macro(&self, token: &str) -> Option<String> {
        (self.0)(token)
    }
}

impl<R: MacroResolver + ?Sized> MacroResolver for &R {
    fn compute_macro(&self, token: &str) -> Option<String> {
        (**self).compute_macro(token)
    }
}

impl<R: MacroResolver + ?Sized> MacroResolver for Box<R> {
    fn compute_macro(&self, token: &str) -> Option<String> {
        (**self).compute_macro(token)
    }
}

/// Ordered list of resolvers; the first one that knows a token wins.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn MacroResolver>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `resolver`, consulted after every resolver already in the chain.
    #[must_use]
    pub fn with<R: MacroResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl MacroResolver for ResolverChain {
    fn compute_macro(&self, token: &str) -> Option<String> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.compute_macro(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(known: &'static str, value: &'static str) -> impl MacroResolver {
        FnResolver(move |token: &str| (token == known).then(|| value.to_string()))
    }

    #[test]
    fn test_closure_is_a_resolver() {
        let resolver = only("$(A)", "a");
        assert_eq!(resolver.compute_macro("$(A)"), Some("a".to_string()));
        assert_eq!(resolver.compute_macro("$(B)"), None);
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let chain = ResolverChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.compute_macro("$(A)"), None);
    }

    #[test]
    fn test_chain_first_match_wins() {
        let chain = ResolverChain::new()
            .with(only("$(A)", "first"))
            .with(only("$(A)", "second"))
            .with(only("$(B)", "b"));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.compute_macro("$(A)"), Some("first".to_string()));
        assert_eq!(chain.compute_macro("$(B)"), Some("b".to_string()));
        assert_eq!(chain.compute_macro("$(C)"), None);
    }

    #[test]
    fn test_boxed_and_borrowed_resolvers_forward() {
        fn resolve_with<R: MacroResolver>(resolver: R) -> Option<String> {
            resolver.compute_macro("$(A)")
        }

        let boxed: Box<dyn MacroResolver> = Box::new(only("$(A)", "a"));
        assert_eq!(resolve_with(&boxed), Some("a".to_string()));
        assert_eq!(resolve_with(boxed), Some("a".to_string()));
    }
}
