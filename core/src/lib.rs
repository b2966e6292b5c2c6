//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod config;
pub mod driver;
pub mod error;
pub mod histogram;
pub mod moments;
pub mod packet;
pub mod plane;
pub mod rng;
pub mod transport;
