//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of tuples, for readability. The traits here convert between the two equivalent
//! representations, both for the types and for the values they hold: the tuple `(a, b, c)`
//! corresponds to the list `(a, (b, (c, ())))`.
//!
//! At present, tuples up to size 64 are supported.

use super::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The number of slots in this tuple.
    const ARITY: usize;

    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// The inductive list of shared references to each slot of this tuple.
    type Refs<'a>: List
    where
        Self: 'a;

    /// The inductive list of unique references to each slot of this tuple.
    type Muts<'a>: List
    where
        Self: 'a;

    /// Move every slot of this tuple into the corresponding inductive list.
    ///
    /// # Examples
    ///
    /// ```
    /// use reshape::tuple::Tuple;
    ///
    /// assert_eq!((1, 'a', "b").into_list(), (1, ('a', ("b", ()))));
    /// ```
    fn into_list(self) -> Self::AsList;

    /// Borrow every slot of this tuple, producing an inductive list of references.
    fn as_refs(&self) -> Self::Refs<'_>;

    /// Mutably borrow every slot of this tuple, producing an inductive list of unique references.
    fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Move every element of this list into the corresponding tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use reshape::tuple::List;
    ///
    /// assert_eq!((1, ('a', ("b", ()))).into_tuple(), (1, 'a', "b"));
    /// ```
    fn into_tuple(self) -> Self::AsTuple;
}

/// The inductive list corresponding to the tuple `T`.
pub type ListOf<T> = <T as Tuple>::AsList;

/// The tuple corresponding to the inductive list `L`.
pub type TupleOf<L> = <L as List>::AsTuple;

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

reshape_macro::impl_tuples!(64);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ListOf<()>, ());
    assert_type_eq_all!(ListOf<(u8,)>, (u8, ()));
    assert_type_eq_all!(ListOf<(u8, char, bool)>, (u8, (char, (bool, ()))));
    assert_type_eq_all!(TupleOf<(u8, (char, ()))>, (u8, char));
    assert_type_eq_all!(<ListOf<(u8, u8, u8)> as HasLength>::Length, UnaryOf<3>);
    assert_type_eq_all!(
        <(u8, String) as Tuple>::Refs<'static>,
        (&'static u8, (&'static String, ()))
    );

    #[test]
    fn arity_counts_slots() {
        assert_eq!(<() as Tuple>::ARITY, 0);
        assert_eq!(<(u8,) as Tuple>::ARITY, 1);
        assert_eq!(<(u8, u16, u32, u64, i8, i16, i32, i64) as Tuple>::ARITY, 8);
    }

    #[test]
    fn refs_point_into_the_tuple() {
        let record = (String::from("left"), 7u32);
        let (name, (count, ())) = record.as_refs();
        assert!(std::ptr::eq(name, &record.0));
        assert!(std::ptr::eq(count, &record.1));
    }

    #[test]
    fn muts_write_through_to_the_tuple() {
        let mut record = (1u8, 'x');
        let (number, (letter, ())) = record.as_muts();
        *number += 1;
        *letter = 'y';
        assert_eq!(record, (2, 'y'));
    }

    #[test]
    fn list_round_trip_preserves_values() {
        let record = (1u8, "two", 3.0f64, '4');
        assert_eq!(record.into_list().into_tuple(), record);
    }
}
