//! Seams to the physics engine: point queries that resolve a cursor to a
//! vertex, and the sink that turns triangle sets into collision fixtures.

mod fixture;
mod pick;

pub use fixture::{FixtureBuilder, FixtureSet};
pub use pick::{RadiusPicker, VertexPicker};
