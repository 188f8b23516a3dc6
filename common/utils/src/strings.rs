//! String utilities for extkit

/// Uppercase the first character and lowercase everything after it.
///
/// ```
/// use extkit_utils::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("WORLD"), "World");
/// assert_eq!(capitalize_first_letter(""), "");
/// ```
pub fn capitalize_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Method-style access to the string utilities.
pub trait StrExt {
    fn capitalize_first_letter(&self) -> String;
}

impl StrExt for str {
    fn capitalize_first_letter(&self) -> String {
        capitalize_first_letter(self)
    }
}
