//! String utility functions for common text manipulation operations.
//!
//! Provides helper functions for formatting sizes, scores and descriptions
//! used across multiple modules in the codebase.

/// Format a byte count as a human-readable string
///
/// # Examples
/// ```ignore
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(2048), "2.0 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{} B", bytes)
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Format a confidence score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Shorten text to at most `max_chars` characters, ending in `...` when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
