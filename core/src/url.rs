//! Base URL and path joining.

/// Join `base` and `path` with exactly one `/` between them.
///
/// Trailing slashes of `base` are always stripped, so an empty `path`
/// yields the stripped base. An empty `base` yields `path` untouched. Inputs
/// are not validated.
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    let head = base.trim_end_matches('/');
    let tail = path.trim_start_matches('/');
    if tail.is_empty() {
        return head.to_string();
    }
    format!("{head}/{tail}")
}
