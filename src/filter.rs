use std::sync::Arc;

use tracing::debug;

use crate::construct::{Dataset, Person, Show};
use crate::search::{IdSet, contains_fold};

// ------------- Controls -------------
// The abstracted state of the filter surface: a free-text field, an
// include/exclude toggle and a view-mode toggle selecting which
// collection the text applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    People,
    Shows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Include,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    pub text: String,
    pub mode: FilterMode,
    pub target: FilterTarget,
}
impl Default for FilterControls {
    fn default() -> Self {
        Self {
            text: String::new(),
            mode: FilterMode::Include,
            target: FilterTarget::People,
        }
    }
}

// ------------- WorkingSet -------------
// The currently visible subset of the reference collections. Rebuilt in
// full on every pass; the untargeted collection always comes back whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    people: Vec<Arc<Person>>,
    shows: Vec<Arc<Show>>,
}
impl WorkingSet {
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            people: dataset.people().to_vec(),
            shows: dataset.shows().to_vec(),
        }
    }
    pub fn recompute(dataset: &Dataset, controls: &FilterControls) -> Self {
        let mut working = WorkingSet::full(dataset);
        // empty text is the identity state regardless of mode and target
        if controls.text.is_empty() {
            return working;
        }
        match controls.target {
            FilterTarget::People => {
                let mut matched = IdSet::new();
                for person in dataset.people() {
                    if contains_fold(person.name(), &controls.text) {
                        matched.push(person.id());
                    }
                }
                working
                    .people
                    .retain(|person| keep(matched.contains(person.id()), controls.mode));
            }
            FilterTarget::Shows => {
                let mut matched = IdSet::new();
                for show in dataset.shows() {
                    if contains_fold(show.title(), &controls.text) {
                        matched.push(show.id());
                    }
                }
                working
                    .shows
                    .retain(|show| keep(matched.contains(show.id()), controls.mode));
            }
        }
        debug!(
            people = working.people.len(),
            shows = working.shows.len(),
            "working set recomputed"
        );
        working
    }
    pub fn people(&self) -> &[Arc<Person>] {
        &self.people
    }
    pub fn shows(&self) -> &[Arc<Show>] {
        &self.shows
    }
}

fn keep(matched: bool, mode: FilterMode) -> bool {
    match mode {
        FilterMode::Include => matched,
        FilterMode::Exclude => !matched,
    }
}
