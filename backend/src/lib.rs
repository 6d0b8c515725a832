//! Regret Minimizer - Guided decision wizard
//!
//! A user names a decision, lists candidate options, enumerates the pros
//! and cons of each, and gets a ranking driven by a loss-aversion-weighted
//! regret score. Finalized decisions are kept in a small local history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
