//! RelHint - optimizer hint predicates for relational query plans
//!
//! This crate decides whether an optimizer hint may propagate onto a plan
//! node, based on the operator category the hint declares.

pub mod config;
pub mod core;
pub mod query;
pub mod utils;
