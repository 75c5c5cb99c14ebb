//! Browser bindings for the Apokria event dashboard
//!
//! This crate is the JS boundary of the single-page dashboard. All window
//! and data state lives in Rust; React only renders what these bindings
//! return and forwards user gestures back in.
//!
//! ## Key Components
//!
//! - [`Dashboard`]: the one stateful export, owning the panel shell and the
//!   localStorage-backed mock store
//! - [`remote`]: free async functions over the real HTTP backend, for
//!   deployments that do not run on the mock

mod dashboard;
pub mod remote;

pub use dashboard::Dashboard;
