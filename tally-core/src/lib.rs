//! Tally Core
//!
//! Core types and pure logic for the Tally task runner.
//!
//! This crate contains:
//! - Domain types: the validated task and its operation
//! - DTOs: wire shapes exchanged with the task endpoints
//! - Validation and calculation, with no I/O

pub mod calculator;
pub mod domain;
pub mod dto;
pub mod error;
pub mod validator;

pub use calculator::{calculate, evaluate};
pub use error::TaskError;
pub use validator::validate;
