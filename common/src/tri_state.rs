//! Tri-state filter selection: every option is Neutral, Included or Excluded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriState {
    Neutral,
    Included,
    Excluded,
}

/// One filter option presented to the user. `id` is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption<T> {
    pub id: T,
    pub label: String,
}

impl<T> FilterOption<T> {
    pub fn new(id: T, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// The include/exclude sets of one filter dimension.
///
/// Invariant: `included` and `excluded` are disjoint after every operation.
/// An id present in neither set is Neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriStateSelection<T: Ord> {
    pub included: BTreeSet<T>,
    pub excluded: BTreeSet<T>,
}

// not derived: the derive would demand `T: Default`, which the id types
// (plain enums, u32) have no reason to carry for an empty selection
impl<T: Ord> Default for TriStateSelection<T> {
    fn default() -> Self {
        Self { included: BTreeSet::new(), excluded: BTreeSet::new() }
    }
}

impl<T: Ord + Clone> TriStateSelection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state_of(&self, id: &T) -> TriState {
        if self.included.contains(id) {
            TriState::Included
        } else if self.excluded.contains(id) {
            TriState::Excluded
        } else {
            TriState::Neutral
        }
    }

    /// Move `id` to Included. Clears it from `excluded` first so the two
    /// sets never intersect. Idempotent.
    pub fn include(&mut self, id: T) {
        self.excluded.remove(&id);
        self.included.insert(id);
    }

    /// Move `id` to Excluded, clearing it from `included`. Idempotent.
    pub fn exclude(&mut self, id: T) {
        self.included.remove(&id);
        self.excluded.insert(id);
    }

    /// Back to Neutral: clears `id` from both sets. Idempotent.
    pub fn reset(&mut self, id: &T) {
        self.included.remove(id);
        self.excluded.remove(id);
    }

    /// Single-click control: Neutral -> Included -> Excluded -> Neutral.
    /// There is no direct Excluded -> Included edge.
    pub fn cycle(&mut self, id: T) {
        match self.state_of(&id) {
            TriState::Neutral => self.include(id),
            TriState::Included => self.exclude(id),
            TriState::Excluded => self.reset(&id),
        }
    }

    pub fn clear(&mut self) {
        self.included.clear();
        self.excluded.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Number of options that are not Neutral, shown in dropdown labels.
    pub fn selection_count(&self) -> usize {
        self.included.len() + self.excluded.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint<T: Ord + std::fmt::Debug>(selection: &TriStateSelection<T>) {
        assert!(
            selection.included.is_disjoint(&selection.excluded),
            "included and excluded must never intersect: {selection:?}"
        );
    }

    #[test]
    fn sets_stay_disjoint_under_any_operation_sequence() {
        let mut selection = TriStateSelection::new();
        // deterministic pseudo-random walk over ops and a small id space
        let mut state: u64 = 0x9E3779B97F4A7C15;
        for _ in 0..1000 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let id = (state >> 33) as u32 % 7;
            match state % 4 {
                0 => selection.include(id),
                1 => selection.exclude(id),
                2 => selection.reset(&id),
                _ => selection.cycle(id),
            }
            assert_disjoint(&selection);
        }
    }

    #[test]
    fn default_is_empty_for_plain_enum_id_types() {
        // id types carry Ord only, no Default
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        enum Dimension {
            First,
            Second,
        }

        let mut selection = TriStateSelection::<Dimension>::default();
        assert!(selection.is_empty());
        selection.include(Dimension::First);
        selection.exclude(Dimension::Second);
        assert_eq!(selection.state_of(&Dimension::First), TriState::Included);
        assert_eq!(selection.state_of(&Dimension::Second), TriState::Excluded);
        assert_disjoint(&selection);
    }

    #[test]
    fn cycle_visits_included_excluded_neutral() {
        let mut selection = TriStateSelection::new();
        assert_eq!(selection.state_of(&5), TriState::Neutral);
        selection.cycle(5);
        assert_eq!(selection.state_of(&5), TriState::Included);
        selection.cycle(5);
        assert_eq!(selection.state_of(&5), TriState::Excluded);
        selection.cycle(5);
        assert_eq!(selection.state_of(&5), TriState::Neutral);
    }

    #[test]
    fn include_on_excluded_clears_the_exclusion() {
        let mut selection = TriStateSelection::new();
        selection.exclude(3);
        selection.include(3);
        assert_eq!(selection.state_of(&3), TriState::Included);
        assert_disjoint(&selection);
    }

    #[test]
    fn operations_are_idempotent() {
        let mut selection = TriStateSelection::new();
        selection.include(1);
        let snapshot = selection.clone();
        selection.include(1);
        assert_eq!(selection, snapshot);
        selection.reset(&9);
        assert_eq!(selection, snapshot);
    }

    #[test]
    fn clear_empties_both_sets() {
        let mut selection = TriStateSelection::new();
        selection.include(1);
        selection.exclude(2);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.selection_count(), 0);
    }
}
