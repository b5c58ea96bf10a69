#![no_std]

use core::fmt::{self, Debug, Display};

pub mod error;
pub mod triplet;
pub mod tuple;

pub use crate::{error::NullValue, triplet::Triplet, tuple::Tuple};

/// A container with a distinguished all-null state.
pub trait MaybeEmpty {
    fn is_empty(&self) -> bool;

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

/// Renders one slot, with a null slot shown as the literal token `null`.
pub(crate) fn fmt_slot<T>(f: &mut fmt::Formatter<'_>, slot: Option<&T>) -> fmt::Result
where
    T: Display,
{
    match slot {
        Some(value) => write!(f, "{value}"),
        None => f.write_str("null"),
    }
}

/// Partially verify the container contract over a set of tuple samples.
/// For all provided samples: equality must be reflexive and symmetric,
/// `rotate` must be an involution, the identity mapping must preserve the
/// value, and emptiness must agree with the accessors.
pub fn partially_verify_tuple_laws<First, Second>(
    samples: impl IntoIterator<Item = Tuple<First, Second>> + Clone,
) where
    First: PartialEq + Clone + Debug,
    Second: PartialEq + Clone + Debug,
{
    for a in samples.clone() {
        assert_eq!(&a, &a);
        assert_eq!(a.clone().rotate().rotate(), a);
        assert_eq!(a.clone().map(|first| first, |second| second), a);
        assert_eq!(a.is_empty(), a.first().is_none() && a.second().is_none());

        for b in samples.clone() {
            assert_eq!(a == b, b == a);
        }
    }
}

/// Three-slot analogue of [`partially_verify_tuple_laws`], additionally
/// checking that dropping a slot agrees with rebuilding a tuple from the
/// remaining two.
pub fn partially_verify_triplet_laws<First, Second, Third>(
    samples: impl IntoIterator<Item = Triplet<First, Second, Third>> + Clone,
) where
    First: PartialEq + Clone + Debug,
    Second: PartialEq + Clone + Debug,
    Third: PartialEq + Clone + Debug,
{
    for a in samples.clone() {
        assert_eq!(&a, &a);
        assert_eq!(
            a.clone().map(|first| first, |second| second, |third| third),
            a
        );
        assert_eq!(
            a.is_empty(),
            a.first().is_none() && a.second().is_none() && a.third().is_none()
        );

        assert_eq!(
            a.clone().without_first(),
            Tuple::of_nullable(a.second().cloned(), a.third().cloned())
        );
        assert_eq!(
            a.clone().without_second(),
            Tuple::of_nullable(a.first().cloned(), a.third().cloned())
        );
        assert_eq!(
            a.clone().without_third(),
            Tuple::of_nullable(a.first().cloned(), a.second().cloned())
        );

        for b in samples.clone() {
            assert_eq!(a == b, b == a);
        }
    }
}
