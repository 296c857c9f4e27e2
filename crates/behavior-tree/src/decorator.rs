//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and modify its result: [`Inverter`] (NOT
//! logic) and [`AlwaysSucceed`] (optional steps).

use crate::{Behavior, BoxedBehavior, Status};

/// Inverts the result of its child.
pub struct Inverter<'a, C> {
    child: BoxedBehavior<'a, C>,
}

impl<'a, C> Inverter<'a, C> {
    pub fn new(child: BoxedBehavior<'a, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// Useful for steps that may or may not apply, such as attaching an optional
/// message, without aborting the enclosing sequence.
pub struct AlwaysSucceed<'a, C> {
    child: BoxedBehavior<'a, C>,
}

impl<'a, C> AlwaysSucceed<'a, C> {
    pub fn new(child: BoxedBehavior<'a, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;
    impl Behavior<i32> for Positive {
        fn tick(&self, ctx: &mut i32) -> Status {
            Status::from_bool(*ctx > 0)
        }
    }

    struct FailAndCount;
    impl Behavior<i32> for FailAndCount {
        fn tick(&self, ctx: &mut i32) -> Status {
            *ctx += 1;
            Status::Failure
        }
    }

    #[test]
    fn inverter_flips_child() {
        let not_positive: Inverter<'_, i32> = Inverter::new(Box::new(Positive));

        assert_eq!(not_positive.tick(&mut 10), Status::Failure);
        assert_eq!(not_positive.tick(&mut -10), Status::Success);
    }

    #[test]
    fn always_succeed_still_runs_child() {
        let always: AlwaysSucceed<'_, i32> = AlwaysSucceed::new(Box::new(FailAndCount));

        let mut count = 0;
        assert_eq!(always.tick(&mut count), Status::Success);
        assert_eq!(count, 1);
    }
}
