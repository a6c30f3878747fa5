//! Frequency counting shared by the summary, category and quality passes.

use indexmap::IndexMap;

use crate::input::{Column, Value, ValueKey};

/// Occurrence count of one distinct value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally<'a> {
    pub value: &'a Value,
    pub count: usize,
}

/// Count non-missing values, keyed in order of first appearance.
pub(crate) fn value_counts(column: &Column) -> IndexMap<ValueKey<'_>, Tally<'_>> {
    let mut counts: IndexMap<ValueKey<'_>, Tally<'_>> = IndexMap::new();
    for value in column.values() {
        if let Some(key) = value.key() {
            counts.entry(key).or_insert(Tally { value, count: 0 }).count += 1;
        }
    }
    counts
}

/// Tallies sorted by count descending. Ties keep first-seen order.
pub(crate) fn ranked<'a>(counts: &IndexMap<ValueKey<'a>, Tally<'a>>) -> Vec<Tally<'a>> {
    let mut tallies: Vec<Tally<'a>> = counts.values().copied().collect();
    // sort_by is stable
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies
}
