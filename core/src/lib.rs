// src/lib.rs

//! Kennel: the domain library behind a small puppy-listing site.
//!
//! It provides:
//!  - The `Puppy` listing and `Visitor` log entities with their create/patch inputs.
//!  - A `Store` trait with an in-memory implementation; other backends live with
//!    the application that owns their driver.
//!  - `Catalog`, the CRUD service over listings.
//!  - `VisitorLog`, a best-effort request logger with pluggable geolocation.

pub mod catalog;
pub mod error;
pub mod geo;
pub mod models;
pub mod seed;
pub mod store;
pub mod visitors;

pub use crate::catalog::Catalog;
pub use crate::error::{KennelError, KennelResult};
pub use crate::geo::{GeoLocator, NoopLocator};
pub use crate::models::{GeoLocation, Gender, NewPuppy, NewVisit, Puppy, PuppyPatch, Visitor};
pub use crate::store::{MemoryStore, Store};
pub use crate::visitors::VisitorLog;
