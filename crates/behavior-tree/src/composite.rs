//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple children:
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic). An ordered rule list
//! is a `Selector` of `Sequence`s.

use crate::{Behavior, BoxedBehavior, Status};

/// Executes children in order until one fails.
///
/// # Semantics
///
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is a short-circuited logical AND (&&).
pub struct Sequence<'a, C> {
    children: Vec<BoxedBehavior<'a, C>>,
}

impl<'a, C> Sequence<'a, C> {
    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Executes children in order until one succeeds.
///
/// # Semantics
///
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// Child order is priority order: earlier children shadow later ones.
pub struct Selector<'a, C> {
    children: Vec<BoxedBehavior<'a, C>>,
}

impl<'a, C> Selector<'a, C> {
    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
