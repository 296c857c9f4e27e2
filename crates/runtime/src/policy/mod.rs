//! Per-tick decision policy.
//!
//! The policy is a priority-ordered rule list built from `behavior-tree`
//! nodes. Guards live in [`conditions`], command-producing nodes in
//! [`actions`], and [`rules`] arranges them in priority order. All nodes
//! share an [`AgentContext`] built fresh for every decision.

pub mod actions;
pub mod conditions;
pub mod context;
pub mod rules;

pub use context::{AgentContext, AttackChoice};
pub use rules::policy_tree;
