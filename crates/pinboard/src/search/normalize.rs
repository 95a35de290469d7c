/// Punctuation that separates words; each becomes a space.
const WORD_BREAKS: [char; 7] = ['.', '!', '?', ',', ':', ';', '/'];
/// Punctuation that joins words; each is dropped, so "t-shirt" reads as "tshirt".
const JOINERS: [char; 4] = ['-', '(', ')', '\''];

/// Normalize a place description for token matching.
///
/// Word-breaking punctuation becomes a space, joining punctuation is removed and the
/// result is lower-cased. Runs of spaces are kept, so "Coffee, tea" becomes
/// `"coffee  tea"` with an empty token between the words.
#[must_use]
pub fn normalize_description(description: &str) -> String {
    description
        .chars()
        .filter(|c| !JOINERS.contains(c))
        .map(|c| if WORD_BREAKS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Split a normalized description on single spaces.
///
/// Leading and interior empty tokens are kept; trailing ones are dropped. An empty string
/// yields a single empty token, a string of only spaces yields none.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    let kept = normalized.trim_end_matches(' ');
    let only_spaces = kept.is_empty() && !normalized.is_empty();
    (!only_spaces)
        .then(|| kept.split(' '))
        .into_iter()
        .flatten()
}

/// Trim and lower-case a raw query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
