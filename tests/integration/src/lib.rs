//! Integration test utilities for the blog server
//!
//! Spawns the real HTTP server on an ephemeral port and drives it over
//! the network with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
