//! Input shaping shared by every writer that stores a person or material name.

/// Title-cases a name: the first letter of each word is upper-cased and the rest lower-cased.
///
/// A "word" starts at any letter that does not directly follow another letter, so
/// `"o'neil"` becomes `"O'Neil"` and `"joHn smith"` becomes `"John Smith"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Case-insensitive substring match used by the read-side list filters.
/// A missing or blank filter matches everything.
pub fn matches_filter(haystack: &str, filter: Option<&str>) -> bool {
    match filter.map(str::trim) {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
