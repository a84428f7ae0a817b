//! Named format drivers available to the [`I18n`](crate::I18n) facade.

use std::collections::HashMap;
use std::fmt;

use crate::parser::{JsonFormat, JsonParser, Parser, TomlFormat, TomlParser};

type ParserFactory = Box<dyn Fn() -> Box<dyn Parser> + Send + Sync>;

/// Maps a parser name to a factory producing fresh, unconfigured parsers.
///
/// Registration happens in start-up code before the registry is handed to
/// [`I18n::builder`](crate::I18n::builder); the facade only reads from it.
///
/// ```
/// use dragon_i18n::{JsonParser, ParserRegistry};
///
/// let mut registry = ParserRegistry::with_defaults();
/// registry.register("json5", || Box::new(JsonParser::default()));
///
/// assert!(registry.contains("json5"));
/// assert!(registry.get("yaml").is_none());
/// ```
#[derive(Default)]
pub struct ParserRegistry {
    factories: HashMap<String, ParserFactory>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in `json` and `toml` drivers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormat::NAME, || Box::new(JsonParser::default()));
        registry.register(TomlFormat::NAME, || Box::new(TomlParser::default()));
        registry
    }

    /// Registers `factory` under `name`, replacing any earlier registration.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Parser> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Builds a new parser registered under `name`.
    pub fn get(&self, name: &str) -> Option<Box<dyn Parser>> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::parser::LoadError;
    use crate::value::Value;

    #[derive(Debug)]
    struct FixedParser(Value);

    impl Parser for FixedParser {
        fn configure(&mut self, _options: &Options) {}

        fn load(&mut self) -> Result<(), LoadError> {
            Ok(())
        }

        fn lookup(&self, _key: &str) -> Option<&Value> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_defaults_registered() {
        let registry = ParserRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["json", "toml"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ParserRegistry::new();
        assert!(registry.get("json").is_none());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = ParserRegistry::new();
        registry.register("fixed", || Box::new(FixedParser(Value::from("first"))));
        registry.register("fixed", || Box::new(FixedParser(Value::from("second"))));

        let parser = registry.get("fixed").unwrap();
        assert_eq!(parser.lookup("any"), Some(&Value::from("second")));
        assert_eq!(registry.names(), vec!["fixed"]);
    }

    #[test]
    fn test_get_builds_fresh_instance() {
        let registry = ParserRegistry::with_defaults();
        let first = registry.get("json").unwrap();
        let second = registry.get("json").unwrap();

        assert!(!std::ptr::addr_eq(&*first, &*second));
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ParserRegistry::with_defaults();
        assert_eq!(
            format!("{registry:?}"),
            r#"ParserRegistry { parsers: ["json", "toml"] }"#
        );
    }
}
