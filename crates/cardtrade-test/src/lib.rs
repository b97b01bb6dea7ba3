//! Shared test fixtures for cardtrade crates.
//!
//! - [`population`] - population builders
//! - [`invariants`] - assertions over the ownership graph
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cardtrade-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use cardtrade_test::{population_with, single_contest, assert_ownership_consistent};
//! ```

pub mod invariants;
pub mod population;

pub use invariants::{assert_ownership_consistent, assert_same_holdings};
pub use population::{grant, population_with, single_contest, Fixture};
