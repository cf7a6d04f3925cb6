// src/lib.rs
//! Decode a saved fantasy football position stats page into player records,
//! fit points against touches and pick the over/under performers.

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod specs;

pub mod analysis;
pub mod decode;
pub mod records;
pub mod schema;

pub mod cli;
pub mod csv;
pub mod params;
pub mod runner;

pub use error::{Error, Result};
