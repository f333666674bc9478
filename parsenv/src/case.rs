//! Field name to environment variable name conversion

/// Convert a `camelCase` or `PascalCase` identifier into `SCREAMING_SNAKE_CASE`.
///
/// A new word starts wherever a lowercase character is directly followed by an
/// uppercase one. Runs of capitals (acronyms) stay together, and identifiers
/// that are already `snake_case` keep their underscores. Characters without a
/// single-character uppercase form (such as `ß`) are kept as they are.
///
/// ```
/// assert_eq!(parsenv::screaming_snake_case("helloGoodWorld"), "HELLO_GOOD_WORLD");
/// assert_eq!(parsenv::screaming_snake_case("database_url"), "DATABASE_URL");
/// ```
pub fn screaming_snake_case(ident: &str) -> String {
    debug_assert!(!ident.is_empty(), "identifier must not be empty");

    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && chars[i - 1].is_lowercase() && c.is_uppercase() {
            out.push('_');
        }
        out.push(to_upper(*c));
    }

    out
}

/// One-to-one uppercase mapping; `c` itself when the full mapping expands.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
