//! Context file path resolution.

/// Default path of the YAML file describing the active solution and project
const DEFAULT_CONTEXT_PATH: &str = "~/.macro-eval/context.yml";

/// Resolves the context file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// context path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use macro_eval_core::config::get_context_path;
///
/// let default_path = get_context_path(&None);
/// assert!(default_path.ends_with("context.yml"));
///
/// let custom_path = get_context_path(&Some("/path/to/context.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/context.yml");
/// ```
pub fn get_context_path(context_path_arg: &Option<String>) -> String {
    let context_path = match context_path_arg {
        Some(context_path) => context_path,
        None => DEFAULT_CONTEXT_PATH,
    };

    shellexpand::tilde(context_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_context_path_with_custom_path() {
        let custom_path = Some("/custom/path/context.yml".to_string());
        assert_eq!(get_context_path(&custom_path), "/custom/path/context.yml");
    }

    #[test]
    fn test_get_context_path_with_none() {
        let result = get_context_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".macro-eval/context.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_context_path_with_tilde() {
        let result = get_context_path(&Some("~/my-context.yml".to_string()));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-context.yml"));
    }
}
