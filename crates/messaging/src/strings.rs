//! crates/messaging/src/strings.rs
//! Shared string tables consulted when interpreting configuration values.
//!
//! # Overview
//!
//! Configuration attributes arrive as free-form text, so boolean settings
//! such as `suppressErrs` are matched against a fixed table of affirmative
//! spellings rather than parsed as a typed boolean. Centralising the table
//! here keeps every component that reads user input agreeing on what counts
//! as "true".
//!
//! # Examples
//!
//! ```
//! use messaging::strings::means_true;
//!
//! assert!(means_true("yes"));
//! assert!(means_true(" True "));
//! assert!(!means_true("nope"));
//! ```

/// Affirmative spellings accepted for boolean configuration attributes.
///
/// Comparison is performed on the trimmed, ASCII-lowercased input, so the
/// table only lists canonical lowercase forms.
pub const TRUTHY: &[&str] = &[
    "yes",
    "y",
    "true",
    "t",
    "si",
    "vero",
    "dajie",
    "oui",
    "ja",
    "yao",
    "verramente",
    "evet",
    "dogru",
    "1",
    "on",
];

/// Reports whether a configuration attribute value means "true".
///
/// Surrounding whitespace and letter case are ignored. Anything not in
/// [`TRUTHY`] means "false"; there is no rejected middle ground.
#[must_use]
pub fn means_true(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    TRUTHY.contains(&normalized.as_str())
}
