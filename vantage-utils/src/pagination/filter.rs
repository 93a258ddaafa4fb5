//! Free-text search, sorting and page slicing over entity collections.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::trace;

use crate::entity::{QueryParams, Record};

use super::page::page_bounds;
use super::sort::sort_entities;

/// How closely a field value matches the search text, best first.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum MatchRank {
    CaseSensitiveEqual,
    Equal,
    StartsWith,
    WordStartsWith,
    Contains,
    Acronym,
    /// In-order character match; the score in `(0, 1]` grows as the matched
    /// characters sit closer together.
    Matches(f64),
    NoMatch,
}

impl MatchRank {
    fn score(self) -> f64 {
        match self {
            Self::CaseSensitiveEqual => 7.0,
            Self::Equal => 6.0,
            Self::StartsWith => 5.0,
            Self::WordStartsWith => 4.0,
            Self::Contains => 3.0,
            Self::Acronym => 2.0,
            Self::Matches(closeness) => 1.0 + closeness,
            Self::NoMatch => 0.0,
        }
    }

    pub fn is_match(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Rank `candidate` against the search `query`.
pub fn rank_match(candidate: &str, query: &str) -> MatchRank {
    if query.chars().count() > candidate.chars().count() {
        return MatchRank::NoMatch;
    }

    if candidate == query {
        return MatchRank::CaseSensitiveEqual;
    }

    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate == query {
        return MatchRank::Equal;
    }

    if candidate.starts_with(&query) {
        return MatchRank::StartsWith;
    }

    if candidate.contains(&format!(" {query}")) {
        return MatchRank::WordStartsWith;
    }

    if candidate.contains(&query) {
        return MatchRank::Contains;
    }

    if query.chars().count() == 1 {
        return MatchRank::NoMatch;
    }

    if acronym(&candidate).contains(&query) {
        return MatchRank::Acronym;
    }

    closeness_rank(&candidate, &query)
}

fn acronym(value: &str) -> String {
    value
        .split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

fn closeness_rank(candidate: &str, query: &str) -> MatchRank {
    let haystack: Vec<char> = candidate.chars().collect();
    let needle: Vec<char> = query.chars().collect();

    let mut cursor = 0;
    let mut first = None;

    for wanted in &needle {
        let Some(offset) = haystack[cursor..].iter().position(|c| c == wanted) else {
            return MatchRank::NoMatch;
        };
        cursor += offset + 1;
        if first.is_none() {
            first = Some(cursor);
        }
    }

    let spread = cursor - first.unwrap_or(cursor);
    if spread == 0 {
        return MatchRank::Matches(1.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let closeness = 1.0 / spread as f64;
    MatchRank::Matches(closeness)
}

fn searchable_strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Number(number) => vec![number.to_string()],
        Value::Bool(flag) => vec![flag.to_string()],
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_array())
            .flat_map(searchable_strings)
            .collect(),
        Value::Null | Value::Object(_) => Vec::new(),
    }
}

struct Ranked<'a, E> {
    entity: &'a E,
    score: f64,
    key_index: usize,
    matched: String,
}

fn best_rank<'a, E: Record, K: AsRef<str>>(
    entity: &'a E,
    query: &str,
    keys: &[K],
) -> Option<Ranked<'a, E>> {
    let mut best: Option<Ranked<'a, E>> = None;

    for (key_index, key) in keys.iter().enumerate() {
        let Some(value) = entity.field(key.as_ref()) else {
            continue;
        };

        for text in searchable_strings(value) {
            let rank = rank_match(&text, query);
            if !rank.is_match() {
                continue;
            }

            let score = rank.score();
            if best.as_ref().is_none_or(|current| score > current.score) {
                best = Some(Ranked {
                    entity,
                    score,
                    key_index,
                    matched: text,
                });
            }
        }
    }

    best
}

/// Entities whose `keys` fuzzily match `query`, best matches first.
pub fn fuzzy_match<E: Record + Clone, K: AsRef<str>>(
    entities: &[E],
    query: &str,
    keys: &[K],
) -> Vec<E> {
    let mut ranked: Vec<Ranked<'_, E>> = entities
        .iter()
        .filter_map(|entity| best_rank(entity, query, keys))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.key_index.cmp(&b.key_index))
            .then_with(|| a.matched.cmp(&b.matched))
    });

    trace!(query, matched = ranked.len(), "fuzzy search ranked");

    ranked.into_iter().map(|hit| hit.entity.clone()).collect()
}

/// Search then sort a collection into a new vector.
///
/// Blank search text skips filtering; the sort always applies.
pub fn filter_and_sort<E: Record + Clone, K: AsRef<str>>(
    entities: &[E],
    search: &str,
    keys: &[K],
    params: &QueryParams,
) -> Vec<E> {
    let query = search.trim();
    let mut filtered = if query.is_empty() {
        entities.to_vec()
    } else {
        fuzzy_match(entities, query, keys)
    };

    sort_entities(&mut filtered, params);
    filtered
}

/// Slice the current page out of a collection.
///
/// Pages past the end yield an empty vector.
pub fn paginate<E: Clone>(entities: &[E], params: &QueryParams) -> Vec<E> {
    let (start, end) = page_bounds(entities.len(), params.page_size, params.page_number);
    entities[start..end].to_vec()
}

/// Page slice of a collection that may not be loaded yet.
pub fn filtered_and_paginated_entities<E: Clone>(
    entities: Option<&[E]>,
    params: &QueryParams,
) -> Vec<E> {
    paginate(entities.unwrap_or_default(), params)
}

/// Table search entry point.
///
/// Hands the searched and sorted full collection to `setter` (or `None`
/// while the collection is not loaded) and returns the current page of the
/// collection as given.
pub fn entity_filter<E, K, F>(
    entities: Option<&[E]>,
    search: &str,
    keys: &[K],
    params: &QueryParams,
    setter: F,
) -> Vec<E>
where
    E: Record + Clone,
    K: AsRef<str>,
    F: FnOnce(Option<Vec<E>>),
{
    setter(entities.map(|all| filter_and_sort(all, search, keys, params)));
    filtered_and_paginated_entities(entities, params)
}
