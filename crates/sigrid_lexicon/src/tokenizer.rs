//! Tokenization of programming-language identifiers.
//!
//! Operation identifiers arrive in camel case or underscore style
//! (`findCustomersByName`, `find_customers_by_name`). Splitting them into
//! words is the first step of verb extraction.

/// Inserts blanks into a camel-case or underscore-separated identifier.
///
/// Underscores become blanks, and a blank is inserted before each ASCII
/// uppercase letter that does not continue an uppercase run. Digits end an
/// uppercase run, so `parseHTML5Doc` splits as `parse HTML5 Doc`. The result
/// is trimmed.
#[must_use]
pub fn split_camel_case(label: &str) -> String {
    let mut spaced = String::with_capacity(label.len() + 8);
    let mut prev = 'a';

    for c in label.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_ascii_uppercase() && (!prev.is_ascii_uppercase() || prev.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = c;
    }

    spaced.trim().to_string()
}

/// Splits an identifier into its lowercased word tokens.
#[must_use]
pub fn tokenize(label: &str) -> Vec<String> {
    split_camel_case(label)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Extracts the presumed verb of an operation identifier.
///
/// The first word token of the identifier is taken as the verb, lowercased.
/// Returns `None` for identifiers without any word token.
#[must_use]
pub fn extract_verb(identifier: &str) -> Option<String> {
    tokenize(identifier).into_iter().next()
}
