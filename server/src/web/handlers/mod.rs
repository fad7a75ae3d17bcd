// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod inquiry_handlers;
pub mod puppy_handlers;
pub mod visitor_handlers;
