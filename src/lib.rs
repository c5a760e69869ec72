//! A typed client for the ccbp.in IPL statistics API.
//!
//! The crate fetches the franchise index and per-team match feeds,
//! normalizes the upstream JSON into the [`model`] records, and derives
//! win/loss/drawn tallies from them. [`TeamTracker`] adds the page-side
//! fetch lifecycle on top: a three-state outcome published over a watch
//! channel, with stale responses from superseded fetches discarded.

pub use client::IplClient;
pub use error::{IplError, Result};
pub use model::{MatchRecord, ResultTally, Team, TeamCode, TeamMatchesView};
pub use tracker::{FetchState, TeamTracker};

pub mod client;
pub mod error;
pub(crate) mod ipl_api;
pub mod model;
pub mod tracker;
