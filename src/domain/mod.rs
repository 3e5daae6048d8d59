//! Entities, their tables, seed data and the wire schemas.

pub mod model;
pub mod schema;
pub mod seed;
