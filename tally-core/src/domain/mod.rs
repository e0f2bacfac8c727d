//! Core domain types
//!
//! A task lives for a single cycle: it is fetched, validated, computed and
//! submitted, then dropped.

pub mod task;
