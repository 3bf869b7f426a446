use regex::{Captures, Regex};
use std::sync::LazyLock;

// Line comments run from `--` to end of line. Block comments are the
// smallest span between `[-` and the next `-]` and may cross newlines.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*|\[-(?s:.*?)-\]").unwrap());

/// Removes comments from the whole source before line splitting.
///
/// Newlines inside a stripped block comment are kept, so line count and
/// structure are unaffected by block comments spanning multiple lines.
pub(crate) fn strip(source: &str) -> String {
    COMMENT
        .replace_all(source, |caps: &Captures| {
            let matched = &caps[0];
            if matched.starts_with("--") {
                String::new()
            } else {
                matched.chars().filter(|&c| c == '\n').collect()
            }
        })
        .into_owned()
}
