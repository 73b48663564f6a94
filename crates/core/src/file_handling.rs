//! Reading the host context file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::context::StaticContext;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads the host context snapshot from a YAML file.
///
/// A file that does not exist means nothing is active, and yields an empty
/// context rather than an error.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_context(context_path: &str) -> Result<StaticContext> {
    if !Path::new(context_path).exists() {
        info!("No context file at `{}`, nothing is active", context_path);
        return Ok(StaticContext::default());
    }

    let mut contents = String::new();
    get_reader("context", context_path)?
        .read_to_string(&mut contents)
        .map_err(|e| Error::io_error("context".to_string(), context_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(StaticContext::default());
    }

    // This can't be shortcut with ? as serde_yaml's error needs the file details attached
    let context: serde_yaml::Result<StaticContext> = serde_yaml::from_str(&contents);

    match context {
        Ok(context) => {
            info!("Loaded context from `{}`", context_path);
            Ok(context)
        }
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "context".to_string(),
            context_path.to_string(),
            e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::context::IdeContext;

    #[test]
    fn test_missing_file_is_empty_context() {
        let context = get_context("/definitely/not/here/context.yml").unwrap();
        assert_eq!(context, StaticContext::default());
    }

    #[test]
    fn test_empty_file_is_empty_context() {
        let temp_file = NamedTempFile::new().unwrap();
        let context = get_context(temp_file.path().to_str().unwrap()).unwrap();
        assert!(context.active_solution().is_none());
    }

    #[test]
    fn test_full_context_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
solution:
  path: '/work/app/app.sln'
project:
  path: '/work/app/core/core.proj'
  configuration:
    name: Release
    platform: arm64
"#
        )
        .unwrap();

        let context = get_context(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(context.active_solution().unwrap().path, "/work/app/app.sln");

        let configuration = context.active_project().unwrap().configuration.unwrap();
        assert_eq!(configuration.name, "Release");
        assert_eq!(configuration.platform, "arm64");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "project: 42").unwrap();

        let result = get_context(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_context(dir.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
