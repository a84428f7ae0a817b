//! File-based options source.

use std::path::Path;

use super::ConfigError;

/// Loads and parses a TOML options file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(crate) fn load_options_file(
    path: &Path,
    required: bool,
) -> Result<Option<toml::Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_lang = \"en-us\"").unwrap();

        let table = load_options_file(file.path(), true).unwrap().unwrap();
        assert_eq!(
            table.get("default_lang"),
            Some(&toml::Value::String("en-us".into()))
        );
    }

    #[test]
    fn test_required_missing() {
        let result = load_options_file(Path::new("/nonexistent/path/i18n.toml"), true);
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_optional_missing() {
        let result = load_options_file(Path::new("/nonexistent/path/i18n.toml"), false);
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_lang = ").unwrap();

        let result = load_options_file(file.path(), true);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
