//! Domain primitives shared by the database and HTTP layers.

pub mod defaults;
pub mod error;
pub mod types;
pub mod validation;
