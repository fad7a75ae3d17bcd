// core/src/models/mod.rs

//! Entities held by the store and the inputs that create or change them.

pub mod puppy;
pub mod visitor;

pub use puppy::{Gender, NewPuppy, Puppy, PuppyPatch, DEFAULT_HEALTH_STATUS};
pub use visitor::{GeoLocation, NewVisit, Visitor, DEFAULT_PAGE};
