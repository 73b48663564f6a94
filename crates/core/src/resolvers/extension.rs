use crate::resolver::MacroResolver;

/// Resolver for project- or module-specific macros.
///
/// It knows no macros yet, so every token passes through it unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionResolver;

impl MacroResolver for ExtensionResolver {
    fn compute_macro(&self, _token: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_resolver_knows_nothing() {
        for token in ["$(SolutionDir)", "$(ProjectDir)", "$(Configuration)", "$(Anything)", ""] {
            assert_eq!(ExtensionResolver.compute_macro(token), None);
        }
    }
}
