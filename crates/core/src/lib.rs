//! Core library for cryptofunds
//!
//! This crate implements the **Functional Core** of the cryptofunds
//! application, following the Functional Core - Imperative Shell pattern:
//!
//! - **`cryptofunds_core`** (this crate): pure transformation functions
//!   with zero I/O
//! - **`cryptofunds`**: HTTP, CLI, and MCP orchestration (the Imperative
//!   Shell)
//!
//! Everything here takes already-decoded JSON and deterministically
//! produces report text. Same input, same output; no network, no clock,
//! no environment. Tests run on fixture data with no mocking.
//!
//! # Module Organization
//!
//! The pipeline is layered leaves-first:
//!
//! - [`record`]: safe field extraction from loosely-typed API records
//! - [`project`]: field mappings and record-to-row projection
//! - [`table`]: aligned ASCII grid rendering
//! - [`report`]: section filtering and multi-section composition
//! - [`funds`]: the per-operation report builders wired from the above

pub mod funds;
pub mod project;
pub mod record;
pub mod report;
pub mod table;
