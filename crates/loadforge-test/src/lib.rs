//! Shared test fixtures for LoadForge crates.
//!
//! This crate provides catalogs and a reference search for testing.
//! It does NOT depend on `loadforge-solver` to avoid circular dependencies.
//!
//! - [`catalog`] - Hand-built catalogs and the small reference scenario
//! - [`random`] - Seeded random catalogs
//! - [`reference`] - Unpruned brute-force top-K search
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! loadforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use loadforge_test::{brute_force_top_k, random_catalog, scenario_catalog};
//! ```

pub mod catalog;
pub mod random;
pub mod reference;

pub use catalog::{scenario_catalog, CatalogBuilder, TestCatalog, SCENARIO_MOBILITY};
pub use random::random_catalog;
pub use reference::brute_force_top_k;
