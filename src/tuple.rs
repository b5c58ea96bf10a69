use core::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{error::NullValue, fmt_slot, MaybeEmpty};

/// An immutable pair of possibly null values.
///
/// Instances are built only through the constructors; the all-null pair is
/// always the canonical [`Tuple::EMPTY`].
#[derive(Debug, Clone, Copy)]
pub struct Tuple<First, Second> {
    repr: Repr<First, Second>,
}

#[derive(Debug, Clone, Copy)]
enum Repr<First, Second> {
    Empty,
    // Never holds two `None`s; `of_nullable` collapses that case to `Empty`.
    Full {
        first: Option<First>,
        second: Option<Second>,
    },
}

impl<First, Second> Tuple<First, Second> {
    /// The canonical tuple with both values null.
    pub const EMPTY: Self = Self { repr: Repr::Empty };

    /// Constructs a tuple, rejecting null values.
    pub fn of(first: Option<First>, second: Option<Second>) -> Result<Self, NullValue> {
        match (first, second) {
            (Some(first), Some(second)) => Ok(Self::of_nullable(Some(first), Some(second))),
            (None, _) => Err(NullValue::First),
            (_, None) => Err(NullValue::Second),
        }
    }

    /// Constructs a tuple in which either value may be null.
    ///
    /// When both values are null this returns [`Tuple::EMPTY`] rather than
    /// a distinct all-null pair.
    pub fn of_nullable(first: Option<First>, second: Option<Second>) -> Self {
        if first.is_none() && second.is_none() {
            return Self::EMPTY;
        }
        Self {
            repr: Repr::Full { first, second },
        }
    }

    /// Constructs a tuple from an optional key-value entry. A null entry
    /// behaves as `of_nullable(None, None)`.
    pub fn of_entry(entry: Option<(Option<First>, Option<Second>)>) -> Self {
        match entry {
            Some((first, second)) => Self::of_nullable(first, second),
            None => Self::of_nullable(None, None),
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

    /// Returns both values as a borrowed key-value entry.
    pub fn to_entry(&self) -> (Option<&First>, Option<&Second>) {
        (self.first(), self.second())
    }

    /// Consumes the tuple, returning both values as a key-value entry.
    pub fn into_entry(self) -> (Option<First>, Option<Second>) {
        match self.repr {
            Repr::Empty => (None, None),
            Repr::Full { first, second } => (first, second),
        }
    }

    /// Constructs a new tuple with both values mapped.
    ///
    /// The mappers run exactly once each, including on null slots, so
    /// either one may observe and produce null. The result goes through
    /// [`Tuple::of_nullable`] and collapses to [`Tuple::EMPTY`] when both
    /// mappers return `None`.
    pub fn map<A, B>(
        self,
        first_mapper: impl FnOnce(Option<First>) -> Option<A>,
        second_mapper: impl FnOnce(Option<Second>) -> Option<B>,
    ) -> Tuple<A, B> {
        let (first, second) = self.into_entry();
        Tuple::of_nullable(first_mapper(first), second_mapper(second))
    }

    /// Constructs a new tuple with the first value mapped.
    pub fn map_first<A>(
        self,
        mapper: impl FnOnce(Option<First>) -> Option<A>,
    ) -> Tuple<A, Second> {
        self.map(mapper, |second| second)
    }

    /// Constructs a new tuple with the second value mapped.
    pub fn map_second<B>(
        self,
        mapper: impl FnOnce(Option<Second>) -> Option<B>,
    ) -> Tuple<First, B> {
        self.map(|first| first, mapper)
    }

    /// Constructs a tuple with the two values switched.
    pub fn rotate(self) -> Tuple<Second, First> {
        let (first, second) = self.into_entry();
        Tuple::of_nullable(second, first)
    }
}

impl<First, Second> MaybeEmpty for Tuple<First, Second> {
    fn is_empty(&self) -> bool {
        self.first().is_none() && self.second().is_none()
    }
}

impl<First, Second> Default for Tuple<First, Second> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<First, Second> From<(First, Second)> for Tuple<First, Second> {
    fn from((first, second): (First, Second)) -> Self {
        Self::of_nullable(Some(first), Some(second))
    }
}

// Equality, hashing and rendering all go through the accessors so that the
// `Empty` and `Full` representations share one structural contract.

impl<First, Second> PartialEq for Tuple<First, Second>
where
    First: PartialEq,
    Second: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.first() == other.first() && self.second() == other.second()
    }
}

impl<First, Second> Eq for Tuple<First, Second>
where
    First: Eq,
    Second: Eq,
{
}

impl<First, Second> Hash for Tuple<First, Second>
where
    First: Hash,
    Second: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first().hash(state);
        self.second().hash(state);
    }
}

impl<First, Second> Display for Tuple<First, Second>
where
    First: Display,
    Second: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt_slot(f, self.first())?;
        f.write_str(",")?;
        fmt_slot(f, self.second())?;
        f.write_str("]")
    }
}

#[cfg(test)]
use crate::partially_verify_tuple_laws;

#[test]
fn check_laws() {
    partially_verify_tuple_laws([
        Tuple::EMPTY,
        Tuple::of_nullable(Some(1), None),
        Tuple::of_nullable(None, Some("x")),
        Tuple::of_nullable(Some(2), Some("y")),
    ]);
}

#[test]
fn nullable_collapses_to_empty() {
    assert!(matches!(
        Tuple::<i32, i32>::of_nullable(None, None).repr,
        Repr::Empty
    ));
    assert!(matches!(
        Tuple::<i32, i32>::of_nullable(Some(1), None).repr,
        Repr::Full { .. }
    ));
    assert!(matches!(
        Tuple::<i32, i32>::of_nullable(None, Some(2)).repr,
        Repr::Full { .. }
    ));
    assert!(matches!(Tuple::<i32, i32>::of_entry(None).repr, Repr::Empty));
    assert!(matches!(Tuple::<i32, i32>::default().repr, Repr::Empty));
}

#[test]
fn of_names_the_null_slot() {
    assert_eq!(Tuple::<i32, i32>::of(None, Some(2)), Err(NullValue::First));
    assert_eq!(Tuple::<i32, i32>::of(Some(1), None), Err(NullValue::Second));
    assert_eq!(Tuple::<i32, i32>::of(None, None), Err(NullValue::First));
    assert_eq!(
        Tuple::of(Some(1), Some(2)),
        Ok(Tuple::of_nullable(Some(1), Some(2)))
    );
}
