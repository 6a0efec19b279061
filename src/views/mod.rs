// src/views/mod.rs
// DOCUMENTATION: Serialization layer
// PURPOSE: Named, static projections of entities into JSON response shapes.
// Field order in every view struct is the order written to the wire.

pub mod feedback;
pub mod links;
pub mod place;
pub mod wishlist;

pub use feedback::*;
pub use links::*;
pub use place::*;
pub use wishlist::*;
