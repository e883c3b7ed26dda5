pub(crate) mod metrics;
pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static TODO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/todos/[^/]+$").expect("Invalid todo path regex"));

/// Collapses `/todos/<anything>` so metrics and spans keep a bounded set of
/// uri labels, malformed ids included.
pub(crate) fn normalize_uri(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    if TODO_ID_REGEX.is_match(path) {
        return "/todos/{id}".to_string();
    }
    path.to_string()
}
