use toml::{Table, Value};
use tracing::debug;

/// Collects environment variables under `prefix` into `table`.
///
/// `I18N__DEFAULT_LANG=en-us` with prefix `I18N` and separator `__` becomes
/// `default_lang = "en-us"`. Names are lowercased and values stay strings.
/// Variables with more than one segment after the prefix are ignored.
pub(crate) fn load_env_vars(table: &mut Table, prefix: &str, separator: &str) {
    merge_vars(table, std::env::vars(), prefix, separator);
}

fn merge_vars(
    table: &mut Table,
    vars: impl IntoIterator<Item = (String, String)>,
    prefix: &str,
    separator: &str,
) {
    if separator.is_empty() {
        return;
    }
    let prefix_with_sep = format!("{prefix}{separator}");

    for (key, value) in vars {
        let Some(name) = key.strip_prefix(&prefix_with_sep) else {
            continue;
        };
        // Options are flat; nested paths cannot name one.
        if name.is_empty() || name.contains(separator) {
            debug!(var = %key, "ignoring environment variable that names no option");
            continue;
        }

        table.insert(name.to_lowercase(), Value::String(value));
    }
}
