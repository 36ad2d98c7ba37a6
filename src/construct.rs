use core::hash::{BuildHasher, BuildHasherDefault};
use std::collections::HashMap;
use std::collections::hash_map::{Entry, RandomState};
use std::hash::Hash;
use std::sync::Arc;

// used to print out readable forms of a record
use std::fmt;

// we will use a fast hashing algo where keys are record ids
use seahash::SeaHasher;

use crate::error::{PlaybillError, Result};

// ------------- Identities -------------
pub type PersonId = u64;
pub type ShowId = u64;

pub type IdHasher = BuildHasherDefault<SeaHasher>;

// ------------- Person -------------
#[derive(Eq, PartialEq, Hash, Debug)]
pub struct Person {
    id: PersonId,
    name: String,
}
impl Person {
    pub fn new(id: PersonId, name: String) -> Self {
        Self { id, name }
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for records after creation.
    pub fn id(&self) -> PersonId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.name)
    }
}

// ------------- Show -------------
#[derive(Eq, PartialEq, Hash, Debug)]
pub struct Show {
    id: ShowId,
    title: String,
}
impl Show {
    pub fn new(id: ShowId, title: String) -> Self {
        Self { id, title }
    }
    pub fn id(&self) -> ShowId {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
}
impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.title)
    }
}

// ------------- Credit -------------
// One row of the many-to-many "appeared in" relation. Rows carry no
// attributes of their own and may repeat.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Credit {
    person: PersonId,
    show: ShowId,
}
impl Credit {
    pub fn new(person: PersonId, show: ShowId) -> Self {
        Self { person, show }
    }
    pub fn person(&self) -> PersonId {
        self.person
    }
    pub fn show(&self) -> ShowId {
        self.show
    }
}
impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} in {})", self.person, self.show)
    }
}

// ------------- Lookup -------------
// One-to-many index over a foreign key (similar to database indexes).
// The payload is a Vec rather than a set, since association rows may
// repeat and results are duplicate-tolerant.
#[derive(Debug)]
pub struct Lookup<K, V, H = RandomState> {
    index: HashMap<K, Vec<V>, H>,
}
impl<K: Eq + Hash, V, H: BuildHasher + Default> Lookup<K, V, H> {
    pub fn new() -> Self {
        Self {
            index: HashMap::<K, Vec<V>, H>::default(),
        }
    }
    pub fn insert(&mut self, key: K, value: V) {
        let values = self.index.entry(key).or_insert(Vec::new());
        values.push(value);
    }
    // a key without entries is an empty result, not a fault
    pub fn lookup(&self, key: &K) -> &[V] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ------------- Dataset -------------
// This sets up the reference data with the necessary structures.
// Everything is read-only once loaded; queries and filter passes never
// mutate it.
pub struct Dataset {
    // record collections in insertion order
    people: Vec<Arc<Person>>,
    shows: Vec<Arc<Show>>,
    credits: Vec<Credit>,
    // id indexes for the records
    person_index: HashMap<PersonId, Arc<Person>, IdHasher>,
    show_index: HashMap<ShowId, Arc<Show>, IdHasher>,
    // owns lookups over the credit key (similar to database indexes)
    person_to_show_lookup: Lookup<PersonId, ShowId, IdHasher>,
    show_to_person_lookup: Lookup<ShowId, PersonId, IdHasher>,
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            shows: Vec::new(),
            credits: Vec::new(),
            person_index: HashMap::default(),
            show_index: HashMap::default(),
            person_to_show_lookup: Lookup::new(),
            show_to_person_lookup: Lookup::new(),
        }
    }
    // functions to add records, which also populate the id indexes
    pub fn add_person(&mut self, id: PersonId, name: String) -> (Arc<Person>, bool) {
        match self.person_index.entry(id) {
            Entry::Vacant(e) => {
                let kept = Arc::new(Person::new(id, name));
                e.insert(Arc::clone(&kept));
                self.people.push(Arc::clone(&kept));
                (kept, false)
            }
            Entry::Occupied(e) => (Arc::clone(e.get()), true),
        }
    }
    pub fn add_show(&mut self, id: ShowId, title: String) -> (Arc<Show>, bool) {
        match self.show_index.entry(id) {
            Entry::Vacant(e) => {
                let kept = Arc::new(Show::new(id, title));
                e.insert(Arc::clone(&kept));
                self.shows.push(Arc::clone(&kept));
                (kept, false)
            }
            Entry::Occupied(e) => (Arc::clone(e.get()), true),
        }
    }
    pub fn add_credit(&mut self, person: PersonId, show: ShowId) {
        self.credits.push(Credit::new(person, show));
        self.person_to_show_lookup.insert(person, show);
        self.show_to_person_lookup.insert(show, person);
    }
    // functions to access the owned collections
    pub fn people(&self) -> &[Arc<Person>] {
        &self.people
    }
    pub fn shows(&self) -> &[Arc<Show>] {
        &self.shows
    }
    pub fn credits(&self) -> &[Credit] {
        &self.credits
    }
    pub fn person(&self, id: PersonId) -> Option<Arc<Person>> {
        self.person_index.get(&id).map(Arc::clone)
    }
    pub fn show(&self, id: ShowId) -> Option<Arc<Show>> {
        self.show_index.get(&id).map(Arc::clone)
    }
    // credit-key lookups, in credit insertion order per key
    pub fn shows_credited_to(&self, person: PersonId) -> &[ShowId] {
        self.person_to_show_lookup.lookup(&person)
    }
    pub fn people_credited_in(&self, show: ShowId) -> &[PersonId] {
        self.show_to_person_lookup.lookup(&show)
    }
    // Credits are assumed to reference known records on every query path.
    // This audit has to be invoked explicitly and never runs as part of
    // a query or filter pass.
    pub fn verify_references(&self) -> Result<()> {
        for credit in &self.credits {
            if !self.person_index.contains_key(&credit.person()) {
                return Err(PlaybillError::DataCorruption {
                    message: format!("credit {} references an unknown person", credit),
                });
            }
            if !self.show_index.contains_key(&credit.show()) {
                return Err(PlaybillError::DataCorruption {
                    message: format!("credit {} references an unknown show", credit),
                });
            }
        }
        Ok(())
    }
}
