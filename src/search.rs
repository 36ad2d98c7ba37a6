use std::sync::Arc;

use crate::construct::{Dataset, Person, PersonId, Show, ShowId};

// used for internal result sets
use roaring::RoaringTreemap;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdSetMode {
    Empty,
    One,
    Many,
}

// Matched record ids from the first stage of a query or filter pass.
// Most passes match nothing or a single record, so those cases are kept
// out of the bitmap.
#[derive(Debug)]
pub struct IdSet {
    mode: IdSetMode,
    one: Option<u64>,
    many: Option<RoaringTreemap>,
}
impl IdSet {
    pub fn new() -> Self {
        Self {
            mode: IdSetMode::Empty,
            one: None,
            many: None,
        }
    }
    fn one(&mut self, id: u64) {
        self.mode = IdSetMode::One;
        self.one = Some(id);
        self.many = None;
    }
    fn many(&mut self, many: RoaringTreemap) {
        self.mode = IdSetMode::Many;
        self.one = None;
        self.many = Some(many);
    }
    pub fn push(&mut self, id: u64) {
        match self.mode {
            IdSetMode::Empty => {
                self.one(id);
            }
            IdSetMode::One => {
                let mut many = RoaringTreemap::new();
                many.insert(self.one.unwrap());
                many.insert(id);
                self.many(many);
            }
            IdSetMode::Many => {
                self.many.as_mut().unwrap().insert(id);
            }
        }
    }
    pub fn contains(&self, id: u64) -> bool {
        match self.mode {
            IdSetMode::Empty => false,
            IdSetMode::One => self.one.unwrap() == id,
            IdSetMode::Many => self.many.as_ref().unwrap().contains(id),
        }
    }
    pub fn mode(&self) -> &IdSetMode {
        &self.mode
    }
    pub fn len(&self) -> u64 {
        match self.mode {
            IdSetMode::Empty => 0,
            IdSetMode::One => 1,
            IdSetMode::Many => self.many.as_ref().unwrap().len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.mode == IdSetMode::Empty
    }
}

// Containment the way the filter box treats it: a substring match with
// case folded on both sides.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// search functions in order to find records related through the credits
pub struct Engine<'a> {
    dataset: &'a Dataset,
}
impl<'a> Engine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }
    /// Shows credited to any person whose name contains `name_fragment`.
    /// One entry per matching credit row, so a person credited twice in
    /// the same show yields that show twice.
    pub fn shows_with_person(&self, name_fragment: &str) -> Vec<Arc<Show>> {
        let mut shows = Vec::new();
        for person in self.dataset.people() {
            if contains_fold(person.name(), name_fragment) {
                self.push_shows_for(person.id(), &mut shows);
            }
        }
        shows
    }
    /// Exact-id variant of [`Engine::shows_with_person`].
    pub fn shows_with_person_id(&self, person: PersonId) -> Vec<Arc<Show>> {
        let mut shows = Vec::new();
        self.push_shows_for(person, &mut shows);
        shows
    }
    /// People credited in any show whose title contains `title_fragment`.
    pub fn people_in_show(&self, title_fragment: &str) -> Vec<Arc<Person>> {
        let mut people = Vec::new();
        for show in self.dataset.shows() {
            if contains_fold(show.title(), title_fragment) {
                self.push_people_for(show.id(), &mut people);
            }
        }
        people
    }
    // Credits pointing at unknown records resolve to nothing here, which
    // silently shortens the result. That precondition is checked by
    // Dataset::verify_references, never on this path.
    fn push_shows_for(&self, person: PersonId, out: &mut Vec<Arc<Show>>) {
        for show_id in self.dataset.shows_credited_to(person) {
            if let Some(show) = self.dataset.show(*show_id) {
                out.push(show);
            }
        }
    }
    fn push_people_for(&self, show: ShowId, out: &mut Vec<Arc<Person>>) {
        for person_id in self.dataset.people_credited_in(show) {
            if let Some(person) = self.dataset.person(*person_id) {
                out.push(person);
            }
        }
    }
}
