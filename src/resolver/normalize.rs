//! App name normalization
//!
//! Reduces superficial differences between a user-supplied app name and catalog
//! tokens or display names: case, `_`/`-`/`.` separators, redundant whitespace and
//! trailing platform words such as "App" or "for Mac".

use std::sync::LazyLock;

use regex::Regex;

/// Runs of `_`, `-` and `.`
#[allow(clippy::expect_used)]
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-.]+").expect("separator pattern is valid"));

/// A trailing platform word, anchored at the end and preceded by whitespace or the
/// start of the name. Longer alternatives come first so `application` wins over `app`.
#[allow(clippy::expect_used)]
static TRAILING_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s+)(?:application|app|client|desktop|for\s+macos|for\s+mac|macos|mac)$")
        .expect("suffix pattern is valid")
});

/// Normalize an app name for comparison
///
/// Lower-cases, turns separator runs into a space, collapses whitespace and strips
/// trailing platform words until none is left. Stripping repeats so the result is a
/// fixed point: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize("Visual Studio Code App"), "visual studio code");
/// assert_eq!(normalize("Sketch-Up_3.App"), "sketch up 3");
/// ```
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let separated = SEPARATORS.replace_all(&lowered, " ");
    let mut normalized = collapse_whitespace(&separated);

    while let Some(m) = TRAILING_SUFFIX.find(&normalized) {
        normalized.truncate(m.start());
        let trimmed_len = normalized.trim_end().len();
        normalized.truncate(trimmed_len);
    }

    normalized
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
