//! Athlete name normalization for identity matching.
//!
//! The secondary source writes names as `"SURNAME Given"`; the primary table
//! uses `"Given Surname"`. Detection is a narrow heuristic isolated in
//! [`detect_name_order`].

/// How a raw secondary-source name is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// Two tokens, `"LAST First"`.
    ReversedPair,
    /// Three or more tokens with an uppercase leading surname.
    ReversedMany,
    /// Anything else, including mononyms and all-uppercase names.
    AsIs,
}

/// Classifies token order of a raw name.
pub fn detect_name_order(raw: &str) -> NameOrder {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [first, second] if is_upper(first) && !is_upper(second) => NameOrder::ReversedPair,
        [first, rest @ ..]
            if rest.len() >= 2 && is_upper(first) && !rest.iter().all(|t| is_upper(t)) =>
        {
            NameOrder::ReversedMany
        }
        _ => NameOrder::AsIs,
    }
}

/// Normalizes a secondary-source name into primary-table form.
///
/// A non-empty `preferred_display` wins and is only title-cased. Otherwise the
/// raw name is reordered per [`detect_name_order`] and title-cased.
///
/// # Examples
/// ```
/// use podium_transform::normalize_secondary_name;
///
/// assert_eq!(normalize_secondary_name("SMITH John", ""), "John Smith");
/// assert_eq!(normalize_secondary_name("VAN-DER Anna Maria", ""), "Anna Maria Van-Der");
/// assert_eq!(normalize_secondary_name("SMITH John", "Johnny SMITH"), "Johnny Smith");
/// ```
pub fn normalize_secondary_name(raw: &str, preferred_display: &str) -> String {
    let preferred = preferred_display.trim();
    if !preferred.is_empty() {
        return title_case(preferred);
    }
    let raw = raw.trim();
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match detect_name_order(raw) {
        NameOrder::ReversedPair | NameOrder::ReversedMany => {
            let (surname, given) = tokens.split_at(1);
            let reordered: Vec<&str> = given.iter().chain(surname).copied().collect();
            title_case(&reordered.join(" "))
        }
        NameOrder::AsIs => title_case(raw),
    }
}

/// Capitalizes each whitespace token and each hyphenated part, lowercasing
/// the rest. Runs of whitespace collapse to one space.
///
/// ```
/// use podium_transform::title_case;
///
/// assert_eq!(title_case("  jean-PIERRE   de la cruz "), "Jean-Pierre De La Cruz");
/// ```
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .split('-')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A token is uppercase when it has at least one cased letter and no
/// lowercase letters.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
