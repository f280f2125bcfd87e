//! English pluralization and the case forms derived from an entity name.

/// Singular words whose plural is spelled out rather than derived.
/// Matched as a lowercase or capitalized suffix, so `BookCategory` is covered.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("company", "companies"),
    ("category", "categories"),
    ("library", "libraries"),
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(char::is_lowercase)
}

fn irregular_plural(word: &str) -> Option<String> {
    IRREGULAR_PLURALS.iter().find_map(|(singular, plural)| {
        if let Some(stem) = word.strip_suffix(singular) {
            return Some(format!("{stem}{plural}"));
        }
        word.strip_suffix(capitalize(singular).as_str())
            .map(|stem| format!("{stem}{}", capitalize(plural)))
    })
}

/// Returns the plural of a singular word, preserving the input's case.
/// An all-caps word gets an all-caps suffix.
///
/// ```
/// use dropin::inflect::pluralize;
///
/// assert_eq!(pluralize("Library"), "Libraries");
/// assert_eq!(pluralize("box"), "boxes");
/// assert_eq!(pluralize("cat"), "cats");
/// assert_eq!(pluralize("CITY"), "CITIES");
/// ```
pub fn pluralize(word: &str) -> String {
    if is_all_caps(word) {
        return pluralize(&word.to_lowercase()).to_uppercase();
    }

    if let Some(plural) = irregular_plural(word) {
        return plural;
    }

    let mut tail = word.chars().rev();
    if let (Some('y'), Some(before)) = (tail.next(), tail.next()) {
        if !"aeiouAEIOU".contains(before) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }

    if ["s", "sh", "ch", "x", "z"].iter().any(|suffix| word.ends_with(suffix)) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// The four spellings of an entity that replace the template entity tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityForms {
    pub pascal_singular: String,
    pub pascal_plural: String,
    pub lower_singular: String,
    pub lower_plural: String,
}

impl EntityForms {
    /// Derives every form from the name as the user typed it.
    pub fn new(entity: &str) -> Self {
        let lower_singular = entity.to_lowercase();
        Self {
            pascal_singular: entity.to_string(),
            pascal_plural: pluralize(entity),
            lower_plural: pluralize(&lower_singular),
            lower_singular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_after_vowel_takes_s() {
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("Day"), "Days");
    }

    #[test]
    fn test_single_letter_y() {
        assert_eq!(pluralize("y"), "ys");
    }

    #[test]
    fn test_irregular_suffix_in_compound_name() {
        assert_eq!(pluralize("BookCategory"), "BookCategories");
        assert_eq!(pluralize("mediacompany"), "mediacompanies");
    }

    #[test]
    fn test_all_caps_words() {
        assert_eq!(pluralize("CITY"), "CITIES");
        assert_eq!(pluralize("LIBRARY"), "LIBRARIES");
        assert_eq!(pluralize("BOX"), "BOXES");
        assert_eq!(pluralize("KEY"), "KEYS");
        assert_eq!(pluralize("URL"), "URLS");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(pluralize(""), "s");
    }

    #[test]
    fn test_entity_forms() {
        let forms = EntityForms::new("Library");
        assert_eq!(forms.pascal_singular, "Library");
        assert_eq!(forms.pascal_plural, "Libraries");
        assert_eq!(forms.lower_singular, "library");
        assert_eq!(forms.lower_plural, "libraries");
    }
}
