//! Core behavior trait.
//!
//! [`Behavior`] is generic over a context type `C`, the blackboard a tree reads
//! its inputs from and writes its outcome to. Contexts are allowed to borrow
//! data, which is why boxed nodes carry an explicit lifetime.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against `ctx`.
    ///
    /// Nodes may read the context and record results on it (e.g. the chosen
    /// command) before reporting success.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Owned, dynamically dispatched node valid for `'a`.
pub type BoxedBehavior<'a, C> = Box<dyn Behavior<C> + 'a>;

impl<'a, C> Behavior<C> for BoxedBehavior<'a, C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Below<'a> {
        limit: &'a i32,
    }

    impl Behavior<i32> for Below<'_> {
        fn tick(&self, ctx: &mut i32) -> Status {
            Status::from_bool(*ctx < *self.limit)
        }
    }

    #[test]
    fn boxed_nodes_may_borrow() {
        let limit = 10;
        let below: BoxedBehavior<'_, i32> = Box::new(Below { limit: &limit });

        assert!(below.tick(&mut 3).is_success());
        assert!(below.tick(&mut 30).is_failure());
    }
}
