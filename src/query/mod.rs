// Query module for the relational optimizer
//
// This module provides:
// - Relational plan nodes and their operator capability classification
// - Optimizer hints and the predicates deciding where a hint may propagate

pub mod optimizer;
pub mod planner;
