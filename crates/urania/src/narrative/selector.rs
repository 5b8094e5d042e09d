//! Stable template selection.
//!
//! The index is a pure function of two identifiers and a category offset:
//! the same transit always reads the same way, across calls, processes and
//! days. Do not swap this for a PRNG.

/// Narrative category. Each has its own offset so one body pair does not
/// land on the same slot in every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Focus,
    SelfCare,
    Summary,
    Action,
    Happening,
    Forecast,
}

impl Category {
    pub fn offset(&self) -> u64 {
        match self {
            Category::Focus => 0,
            Category::SelfCare => 3,
            Category::Summary => 7,
            Category::Action => 11,
            Category::Happening => 13,
            Category::Forecast => 22,
        }
    }
}

fn char_sum(id: &str) -> u64 {
    id.chars().map(|c| c as u64).sum()
}

/// `(Σ chars(id1) + Σ chars(id2) + offset) mod len`, or `None` for an empty list.
pub fn select_index(id1: &str, id2: &str, offset: u64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let hash = char_sum(id1)
        .wrapping_add(char_sum(id2))
        .wrapping_add(offset);
    Some((hash % len as u64) as usize)
}

/// Pick a candidate for the pair `(id1, id2)` in the given category.
pub fn select<'a, T>(id1: &str, id2: &str, category: Category, candidates: &'a [T]) -> Option<&'a T> {
    select_index(id1, id2, category.offset(), candidates.len()).map(|i| &candidates[i])
}
