//! Core types, constants and errors shared by the geometry library

pub mod types;
pub mod constants;
pub mod error;

pub use types::*;
pub use constants::*;
pub use error::{GeoError, GeoResult};
