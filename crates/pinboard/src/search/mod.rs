//! Whole-word search over place descriptions.
//!
//! A place matches a query when the trimmed, lower-cased query is exactly one of the
//! tokens of its normalized description. Partial words never match: "class" does not
//! find "classroom".
//!
//! ```rust
//! use pinboard::{Place, search};
//!
//! let places = vec![Place::new("a", "Geoff", 40.1, -88.2, "zz", "Nice quiet spot.")];
//! assert_eq!(search(&places, "QUIET").len(), 1);
//! assert!(search(&places, "quie").is_empty());
//! ```

use std::borrow::Cow;

use tracing::{debug, instrument};

use crate::{Place, error::PinboardError};

mod normalize;

pub use normalize::{normalize_description, normalize_query, tokens};

/// Filter `places` down to those whose description contains `query` as a whole word.
///
/// An empty `places`, an empty `query` or a query of exactly one space is a passthrough:
/// the input is returned unchanged and borrowed. Any other query that matches nothing
/// returns an empty list; falling back to the full list is the caller's decision
/// (see [`crate::handlers::on_query_text_change`]).
///
/// Input order is preserved and each place appears at most once.
#[instrument(name = "Description search", skip(places), fields(total = places.len()), level = "debug")]
pub fn search<'a>(places: &'a [Place], query: &str) -> Cow<'a, [Place]> {
    if places.is_empty() || query.is_empty() || query == " " {
        debug!("Passthrough query, returning input unchanged");
        return Cow::Borrowed(places);
    }

    let needle = normalize_query(query);
    let matched: Vec<Place> = places
        .iter()
        .filter(|place| matches(place, &needle))
        .cloned()
        .collect();

    debug!(matches = matched.len(), "Description search complete");
    Cow::Owned(matched)
}

/// Checked variant of [`search`] for callers that may not have a list or a query yet.
///
/// A missing argument is a caller bug and fails with [`PinboardError::InvalidArgument`].
pub fn try_search<'a>(
    places: Option<&'a [Place]>,
    query: Option<&str>,
) -> Result<Cow<'a, [Place]>, PinboardError> {
    let places =
        places.ok_or_else(|| PinboardError::InvalidArgument("places must be provided".into()))?;
    let query =
        query.ok_or_else(|| PinboardError::InvalidArgument("query must be provided".into()))?;
    Ok(search(places, query))
}

/// Returns true if `normalized_query` is one of the description tokens of `place`.
///
/// `normalized_query` must already have gone through [`normalize_query`].
#[must_use]
pub fn matches(place: &Place, normalized_query: &str) -> bool {
    tokens(&normalize_description(place.description())).any(|token| token == normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, description: &str) -> Place {
        Place::new(id, "Owner", 40.11, -88.23, "zz", description)
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(Place::id).collect()
    }

    #[test]
    fn test_exact_word_match() {
        let places = vec![place("a", "Nice quiet spot.")];
        let results = search(&places, "quiet");
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_partial_word_does_not_match() {
        let places = vec![place("a", "Nice quiet spot.")];
        assert!(search(&places, "quie").is_empty());

        let places = vec![place("b", "My favourite classroom")];
        assert!(search(&places, "class").is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let places = vec![place("a", "Best COFFEE in town")];
        assert_eq!(ids(&search(&places, "  Coffee ")), vec!["a"]);
    }

    #[test]
    fn test_punctuation_in_description() {
        let places = vec![
            place("a", "Coffee!Tea"),
            place("b", "study/nap"),
            place("c", "The (secret) garden"),
            place("d", "Don't miss it"),
            place("e", "a well-lit room"),
        ];
        assert_eq!(ids(&search(&places, "tea")), vec!["a"]);
        assert_eq!(ids(&search(&places, "nap")), vec!["b"]);
        assert_eq!(ids(&search(&places, "secret")), vec!["c"]);
        assert_eq!(ids(&search(&places, "dont")), vec!["d"]);
        assert_eq!(ids(&search(&places, "welllit")), vec!["e"]);
        assert!(search(&places, "well").is_empty());
    }

    #[test]
    fn test_passthrough_queries() {
        let places = vec![place("a", "one"), place("b", "two")];

        for query in ["", " "] {
            let results = search(&places, query);
            assert!(matches!(results, Cow::Borrowed(_)));
            assert_eq!(results.as_ref(), places.as_slice());
        }
    }

    #[test]
    fn test_blank_query_matches_descriptions_with_empty_tokens() {
        let places = vec![
            place("a", "Coffee, tea"),
            place("b", "plain words"),
            place("c", ""),
            place("d", "trailing. "),
        ];
        assert_eq!(ids(&search(&places, "  ")), vec!["a", "c"]);
        assert_eq!(ids(&search(&places, "\t")), vec!["a", "c"]);
    }

    #[test]
    fn test_empty_places_passthrough() {
        let places: Vec<Place> = Vec::new();
        assert!(search(&places, "quiet").is_empty());
    }

    #[test]
    fn test_each_place_included_once_in_order() {
        let places = vec![
            place("a", "park park park"),
            place("b", "no match here"),
            place("c", "Park."),
        ];
        assert_eq!(ids(&search(&places, "park")), vec!["a", "c"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let places = vec![
            place("a", "quiet park"),
            place("b", "loud bar"),
            place("c", "quiet library"),
        ];
        let once = search(&places, "quiet");
        let twice = search(&once, "quiet");
        assert_eq!(once.as_ref(), twice.as_ref());
    }

    #[test]
    fn test_try_search_rejects_missing_arguments() {
        let places = vec![place("a", "quiet")];
        assert!(matches!(
            try_search(None, Some("quiet")),
            Err(PinboardError::InvalidArgument(_))
        ));
        assert!(matches!(
            try_search(Some(&places), None),
            Err(PinboardError::InvalidArgument(_))
        ));
        let results = try_search(Some(&places), Some("quiet")).unwrap();
        assert_eq!(results.len(), 1);
    }
}
