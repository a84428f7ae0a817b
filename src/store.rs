//! In-memory translation tree: language -> namespace -> nested values.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use tracing::debug;

use crate::parser::{Format, LoadError};
use crate::value::Value;
use crate::walker::list_files;

/// Normalizes a language code so `zh-cn` and `zh_cn` name the same tree.
pub fn normalize_lang(code: &str) -> String {
    code.replace('-', "_")
}

/// Every loaded language file, keyed by normalized language and then by the
/// file's base name (its namespace).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    languages: BTreeMap<String, BTreeMap<String, Value>>,
}

impl TranslationStore {
    /// Walks `root` and decodes every file with `format`.
    ///
    /// `root` must contain one directory per language holding flat files.
    /// Any layout, read or decode failure aborts the load.
    pub fn load(root: &Path, format: &dyn Format) -> Result<Self, LoadError> {
        let suffix = format!(".{}", format.extension());
        let mut store = Self::default();

        for path in list_files(root)? {
            let (lang, file_name) = split_layout(root, &path)?;
            let namespace = file_name.strip_suffix(&suffix).unwrap_or(file_name);

            let contents = std::fs::read(&path).map_err(|source| LoadError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let value = format
                .decode(&contents)
                .map_err(|source| LoadError::Decode {
                    path: path.clone(),
                    source,
                })?;

            store
                .languages
                .entry(normalize_lang(lang))
                .or_default()
                .insert(namespace.to_string(), value);
        }

        debug!(
            root = %root.display(),
            format = format.name(),
            languages = store.languages.len(),
            "loaded translations"
        );
        Ok(store)
    }

    /// Resolves a dotted key such as `error.err2.bb.cc` in language `lang`.
    ///
    /// The first segment names the namespace; the rest descend into nested
    /// objects. A missing segment, a scalar in the middle of the path, or a
    /// `null` at the end all resolve to `None`.
    pub fn resolve(&self, lang: &str, key: &str) -> Option<&Value> {
        if key.is_empty() {
            return None;
        }

        let namespaces = self.languages.get(&normalize_lang(lang))?;
        let mut segments = key.split('.');
        let mut current = namespaces.get(segments.next()?)?;
        for segment in segments {
            current = current.get(segment)?;
        }

        (!current.is_null()).then_some(current)
    }

    /// Normalized codes of every loaded language, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Namespaces loaded for `lang`, sorted. Empty for an unknown language.
    pub fn namespaces(&self, lang: &str) -> impl Iterator<Item = &str> {
        self.languages
            .get(&normalize_lang(lang))
            .into_iter()
            .flat_map(|namespaces| namespaces.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Splits `path` relative to `root` into `(language folder, file name)`.
fn split_layout<'a>(root: &Path, path: &'a Path) -> Result<(&'a str, &'a str), LoadError> {
    let layout_error = || LoadError::Layout {
        path: path.to_path_buf(),
    };

    let relative = path.strip_prefix(root).map_err(|_| layout_error())?;
    let mut parts = relative.components().map(|component| match component {
        Component::Normal(part) => part.to_str(),
        _ => None,
    });

    match (parts.next(), parts.next(), parts.next()) {
        (Some(Some(lang)), Some(Some(file_name)), None) => Ok((lang, file_name)),
        _ => Err(layout_error()),
    }
}
