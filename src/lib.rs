//! Playbill – an in-memory relational filter engine over people, shows and
//! the credits connecting them.
//!
//! Playbill centers on three small collections:
//! * A [`construct::Person`] is a named record with an opaque integer id.
//! * A [`construct::Show`] is a titled record with an opaque integer id.
//! * A [`construct::Credit`] states that a person appeared in a show. The
//!   relation is many-to-many, rows carry no attributes and may repeat.
//!
//! The collections are owned by the [`construct::Dataset`] keeper, which
//! shares records through `Arc` and maintains hash indexes over the credit
//! key so lookups in either direction are a single probe rather than a scan.
//! The dataset is loaded once and read-only afterwards.
//!
//! ## Modules
//! * [`construct`] – Records, the dataset keeper and its lookup indexes.
//! * [`search`] – The join engine resolving people to shows and back, plus
//!   the internal id result sets.
//! * [`filter`] – Filter control state and working-set recomputation.
//! * [`interface`] – The controller and the visualization adapter seam.
//! * [`settings`] – Configuration file handling.
//! * [`error`] – Crate-wide error type.
//!
//! ## Filtering
//! A filter pass rebuilds the visible [`filter::WorkingSet`] from scratch:
//! both collections reset to the full reference data, then a case-folded
//! containment predicate narrows the targeted collection (people names or
//! show titles, kept or excluded per the mode toggle). Credit lookups always
//! run against the full reference data, never the filtered subset.
//!
//! ## Quick Start
//! ```
//! use playbill::construct::Dataset;
//! use playbill::search::Engine;
//!
//! let mut dataset = Dataset::new();
//! let (alice, _) = dataset.add_person(1, String::from("Alice"));
//! dataset.add_show(10, String::from("ShowA"));
//! dataset.add_credit(alice.id(), 10);
//! let engine = Engine::new(&dataset);
//! let shows = engine.shows_with_person_id(alice.id());
//! assert_eq!(shows[0].title(), "ShowA");
//! ```
//!
//! ## Concurrency
//! Single-threaded and synchronous by design: every operation runs to
//! completion inside one event callback, and the only long-lived state is
//! the read-only dataset plus the working set owned by the controller.

pub mod construct;
pub mod error;
pub mod filter;
pub mod interface;
pub mod search;
pub mod settings;
