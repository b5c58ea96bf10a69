use core::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{error::NullValue, fmt_slot, tuple::Tuple, MaybeEmpty};

/// An immutable triple of possibly null values.
///
/// Instances are built only through the constructors; the all-null triple
/// is always the canonical [`Triplet::EMPTY`].
#[derive(Debug, Clone, Copy)]
pub struct Triplet<First, Second, Third> {
    repr: Repr<First, Second, Third>,
}

#[derive(Debug, Clone, Copy)]
enum Repr<First, Second, Third> {
    Empty,
    // Never holds `None` in both of the first two slots; `of_nullable`
    // collapses that case to `Empty`.
    Full {
        first: Option<First>,
        second: Option<Second>,
        third: Option<Third>,
    },
}

impl<First, Second, Third> Triplet<First, Second, Third> {
    /// The canonical triplet with all three values null.
    pub const EMPTY: Self = Self { repr: Repr::Empty };

    /// Constructs a triplet, rejecting null values.
    pub fn of(
        first: Option<First>,
        second: Option<Second>,
        third: Option<Third>,
    ) -> Result<Self, NullValue> {
        match (first, second, third) {
            (Some(first), Some(second), Some(third)) => {
                Ok(Self::of_nullable(Some(first), Some(second), Some(third)))
            }
            (None, _, _) => Err(NullValue::First),
            (_, None, _) => Err(NullValue::Second),
            (_, _, None) => Err(NullValue::Third),
        }
    }

    /// Constructs a triplet in which any value may be null.
    ///
    /// The collapse check mirrors the pair constructor and looks at the
    /// first two values only: when both are null this returns
    /// [`Triplet::EMPTY`] and the third value is dropped, even when it is
    /// not null.
    pub fn of_nullable(
        first: Option<First>,
        second: Option<Second>,
        third: Option<Third>,
    ) -> Self {
        if first.is_none() && second.is_none() {
            return Self::EMPTY;
        }
        Self {
            repr: Repr::Full {
                first,
                second,
                third,
            },
        }
    }

    /// Returns the first value.
    pub fn first(&self) -> Option<&First> {
        match &self.repr {
            Repr::Empty => None,
            Repr::Full { first, .. } => first.as_ref(),
        }
    }

    /// Returns the second value.
    pub fn second(&self) -> Option<&Second> {
        match &self.repr {
            Repr::Empty => None,
            Repr::Full { second, .. } => second.as_ref(),
        }
    }

    /// Returns the third value.
    pub fn third(&self) -> Option<&Third> {
        match &self.repr {
            Repr::Empty => None,
            Repr::Full { third, .. } => third.as_ref(),
        }
    }

    fn into_slots(self) -> (Option<First>, Option<Second>, Option<Third>) {
        match self.repr {
            Repr::Empty => (None, None, None),
            Repr::Full {
                first,
                second,
                third,
            } => (first, second, third),
        }
    }

    /// Constructs a tuple from this triplet, discarding the first value.
    pub fn without_first(self) -> Tuple<Second, Third> {
        let (_, second, third) = self.into_slots();
        Tuple::of_nullable(second, third)
    }

    /// Constructs a tuple from this triplet, discarding the second value.
    pub fn without_second(self) -> Tuple<First, Third> {
        let (first, _, third) = self.into_slots();
        Tuple::of_nullable(first, third)
    }

    /// Constructs a tuple from this triplet, discarding the third value.
    pub fn without_third(self) -> Tuple<First, Second> {
        let (first, second, _) = self.into_slots();
        Tuple::of_nullable(first, second)
    }

    /// Constructs a new triplet with all three values mapped.
    ///
    /// The mappers run exactly once each, including on null slots, so any
    /// of them may observe and produce null. The result goes through
    /// [`Triplet::of_nullable`] and is subject to its collapse rule.
    pub fn map<A, B, C>(
        self,
        first_mapper: impl FnOnce(Option<First>) -> Option<A>,
        second_mapper: impl FnOnce(Option<Second>) -> Option<B>,
        third_mapper: impl FnOnce(Option<Third>) -> Option<C>,
    ) -> Triplet<A, B, C> {
        let (first, second, third) = self.into_slots();
        Triplet::of_nullable(
            first_mapper(first),
            second_mapper(second),
            third_mapper(third),
        )
    }

    /// Constructs a new triplet with the first value mapped.
    pub fn map_first<A>(
        self,
        mapper: impl FnOnce(Option<First>) -> Option<A>,
    ) -> Triplet<A, Second, Third> {
        self.map(mapper, |second| second, |third| third)
    }

    /// Constructs a new triplet with the second value mapped.
    pub fn map_second<B>(
        self,
        mapper: impl FnOnce(Option<Second>) -> Option<B>,
    ) -> Triplet<First, B, Third> {
        self.map(|first| first, mapper, |third| third)
    }

    /// Constructs a new triplet with the third value mapped.
    pub fn map_third<C>(
        self,
        mapper: impl FnOnce(Option<Third>) -> Option<C>,
    ) -> Triplet<First, Second, C> {
        self.map(|first| first, |second| second, mapper)
    }
}

impl<First, Second, Third> MaybeEmpty for Triplet<First, Second, Third> {
    // Unlike the constructor's collapse rule, emptiness examines all three
    // slots.
    fn is_empty(&self) -> bool {
        self.first().is_none() && self.second().is_none() && self.third().is_none()
    }
}

impl<First, Second, Third> Default for Triplet<First, Second, Third> {
    fn default() -> Self {
        Self::EMPTY
    }
}

// Equality, hashing and rendering all go through the accessors so that the
// `Empty` and `Full` representations share one structural contract.

impl<First, Second, Third> PartialEq for Triplet<First, Second, Third>
where
    First: PartialEq,
    Second: PartialEq,
    Third: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.first() == other.first()
            && self.second() == other.second()
            && self.third() == other.third()
    }
}

impl<First, Second, Third> Eq for Triplet<First, Second, Third>
where
    First: Eq,
    Second: Eq,
    Third: Eq,
{
}

impl<First, Second, Third> Hash for Triplet<First, Second, Third>
where
    First: Hash,
    Second: Hash,
    Third: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first().hash(state);
        self.second().hash(state);
        self.third().hash(state);
    }
}

impl<First, Second, Third> Display for Triplet<First, Second, Third>
where
    First: Display,
    Second: Display,
    Third: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt_slot(f, self.first())?;
        f.write_str(",")?;
        fmt_slot(f, self.second())?;
        f.write_str(",")?;
        fmt_slot(f, self.third())?;
        f.write_str("]")
    }
}

#[cfg(test)]
use crate::partially_verify_triplet_laws;

#[test]
fn check_laws() {
    partially_verify_triplet_laws([
        Triplet::EMPTY,
        Triplet::of_nullable(Some(1), None, None),
        Triplet::of_nullable(None, Some("x"), None),
        Triplet::of_nullable(None, Some("x"), Some('c')),
        Triplet::of_nullable(Some(2), Some("y"), Some('z')),
    ]);
}

#[test]
fn nullable_collapse_checks_first_two_slots_only() {
    let t = Triplet::<i32, i32, i32>::of_nullable(None, None, Some(3));
    assert!(matches!(t.repr, Repr::Empty));
    assert_eq!(t.third(), None);

    assert!(matches!(
        Triplet::<i32, i32, i32>::of_nullable(None, Some(2), None).repr,
        Repr::Full { .. }
    ));
    assert!(matches!(
        Triplet::<i32, i32, i32>::of_nullable(Some(1), None, None).repr,
        Repr::Full { .. }
    ));
    assert!(matches!(Triplet::<i32, i32, i32>::default().repr, Repr::Empty));
}

#[test]
fn of_names_the_null_slot() {
    assert_eq!(
        Triplet::<i32, i32, i32>::of(None, Some(2), Some(3)),
        Err(NullValue::First)
    );
    assert_eq!(
        Triplet::<i32, i32, i32>::of(Some(1), None, Some(3)),
        Err(NullValue::Second)
    );
    assert_eq!(
        Triplet::<i32, i32, i32>::of(Some(1), Some(2), None),
        Err(NullValue::Third)
    );
    assert_eq!(
        Triplet::of(Some(1), Some(2), Some(3)),
        Ok(Triplet::of_nullable(Some(1), Some(2), Some(3)))
    );
}
