//! Input parsing for Seidel.
//!
//! Two input shapes are supported:
//! - raw per-cell strings, as typed into a matrix form ([`parse_entries`])
//! - a plain-text system file, one equation per line ([`parse_system`])
//!
//! Both produce a validated [`seidel_core::LinearSystem`], so anything that
//! parses is safe to hand to the solver.

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::{parse_entries, parse_system, parse_system_file};
