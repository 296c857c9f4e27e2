//! Builder helpers for terse tree construction.
//!
//! `selector(vec![sequence(vec![guard, action]), ...])` reads like the rule
//! list it implements.

use crate::{AlwaysSucceed, Behavior, BoxedBehavior, Inverter, Selector, Sequence};

/// Boxes any node.
#[inline]
pub fn node<'a, C, B>(behavior: B) -> BoxedBehavior<'a, C>
where
    B: Behavior<C> + 'a,
{
    Box::new(behavior)
}

#[inline]
pub fn sequence<'a, C: 'a>(children: Vec<BoxedBehavior<'a, C>>) -> BoxedBehavior<'a, C> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<'a, C: 'a>(children: Vec<BoxedBehavior<'a, C>>) -> BoxedBehavior<'a, C> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<'a, C: 'a>(child: BoxedBehavior<'a, C>) -> BoxedBehavior<'a, C> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn always_succeed<'a, C: 'a>(child: BoxedBehavior<'a, C>) -> BoxedBehavior<'a, C> {
    Box::new(AlwaysSucceed::new(child))
}
