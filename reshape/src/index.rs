//! Type-level index sequences, the drivers of every positional operation.
//!
//! An index sequence is an inductive list of unary numbers: `[0, 2, 1]` is the type
//! `(Z, (S<S<Z>>, (S<Z>, ())))`. Contiguous sequences are produced by [`Range`] (and its aliases
//! [`Iota`], [`Offset`], [`IndexSequence`], and [`OffsetSequence`]); arbitrary ones, including
//! permuted, partial, and repeating sequences, are written with the [`Indices!`](crate::Indices)
//! macro.

use crate::unary::{Compare, Unary, UnaryOf, S, Z};

/// Produce the sequence `[Start, Start + 1, ..., Start + N - 1]`, where `N` is `Self`.
///
/// # Examples
///
/// ```
/// use reshape::index::Range;
/// use reshape::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     <UnaryOf<3> as Range<UnaryOf<2>>>::Output,
///     (UnaryOf<2>, (UnaryOf<3>, (UnaryOf<4>, ()))),
/// );
/// ```
pub trait Range<Start: Unary>: Unary {
    /// The resulting index sequence.
    type Output: IndexList;
}

impl<Start: Unary> Range<Start> for Z {
    type Output = ();
}

impl<Start: Unary, N: Range<S<Start>>> Range<Start> for S<N> {
    type Output = (Start, <N as Range<S<Start>>>::Output);
}

/// The sequence `[0, 1, ..., N - 1]` for a unary length `N`.
pub type Iota<N> = <N as Range<Z>>::Output;

/// The sequence `[O, O + 1, ..., O + N - 1]` for a unary offset `O` and length `N`.
pub type Offset<O, N> = <N as Range<O>>::Output;

/// The sequence `[0, 1, ..., N - 1]` for a constant length `N`.
///
/// ```
/// use reshape::index::{IndexList, IndexSequence};
///
/// assert_eq!(<IndexSequence<4> as IndexList>::to_vec(), vec![0, 1, 2, 3]);
/// ```
pub type IndexSequence<const N: usize> = Iota<UnaryOf<N>>;

/// The sequence `[O, O + 1, ..., O + N - 1]` for constant offset `O` and length `N`.
///
/// ```
/// use reshape::index::{IndexList, OffsetSequence};
///
/// assert_eq!(<OffsetSequence<3, 2> as IndexList>::to_vec(), vec![3, 4]);
/// ```
pub type OffsetSequence<const O: usize, const N: usize> = Offset<UnaryOf<O>, UnaryOf<N>>;

/// Write out an explicit index sequence from constant indices.
///
/// The sequence may be in any order, may omit indices, and may repeat them. Whether a given
/// sequence is acceptable is decided by the operation it is handed to.
///
/// ```
/// use reshape::Indices;
/// use reshape::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Indices![], ());
/// assert_type_eq_all!(Indices![2, 0, 2], (UnaryOf<2>, (UnaryOf<0>, (UnaryOf<2>, ()))));
/// ```
#[macro_export]
macro_rules! Indices {
    () => { () };
    ($n:tt $(, $rest:tt)* $(,)?) => {
        ($crate::unary::UnaryOf<$n>, $crate::Indices![$($rest),*])
    };
}

/// Exchange the values `I` and `J` wherever they occur in an index sequence, leaving every other
/// index alone.
///
/// Applied to `[0, 1, ..., N - 1]` this yields the index sequence which, when used to select from
/// a record, swaps slots `I` and `J`.
///
/// ```
/// use reshape::index::{IndexList, IndexSequence, Swapped};
/// use reshape::unary::UnaryOf;
///
/// type Output = <IndexSequence<5> as Swapped<UnaryOf<1>, UnaryOf<3>>>::Output;
/// assert_eq!(<Output as IndexList>::to_vec(), vec![0, 3, 2, 1, 4]);
/// ```
pub trait Swapped<I: Unary, J: Unary>: IndexList {
    /// The sequence with `I` and `J` exchanged.
    type Output: IndexList;
}

impl<I: Unary, J: Unary> Swapped<I, J> for () {
    type Output = ();
}

impl<I: Unary, J: Unary, K: Unary, Rest: Swapped<I, J>> Swapped<I, J> for (K, Rest)
where
    (K, J): Compare<K, I, K>,
    (K, I): Compare<<(K, J) as Compare<K, I, K>>::Result, J, <(K, J) as Compare<K, I, K>>::Result>,
    <(K, I) as Compare<
        <(K, J) as Compare<K, I, K>>::Result,
        J,
        <(K, J) as Compare<K, I, K>>::Result,
    >>::Result: Unary,
{
    type Output = (
        <(K, I) as Compare<
            <(K, J) as Compare<K, I, K>>::Result,
            J,
            <(K, J) as Compare<K, I, K>>::Result,
        >>::Result,
        <Rest as Swapped<I, J>>::Output,
    );
}

/// A type-level sequence of unary indices, reflected to runtime.
pub trait IndexList {
    /// The number of indices in the sequence.
    const LEN: usize;

    /// Call `f` with every index of the sequence, front to back.
    fn for_each_index(f: impl FnMut(usize));

    /// Collect the sequence into a vector of `usize`.
    fn to_vec() -> Vec<usize> {
        let mut indices = Vec::with_capacity(Self::LEN);
        Self::for_each_index(|i| indices.push(i));
        indices
    }
}

impl IndexList for () {
    const LEN: usize = 0;

    fn for_each_index(_: impl FnMut(usize)) {}
}

impl<N: Unary, Rest: IndexList> IndexList for (N, Rest) {
    const LEN: usize = Rest::LEN + 1;

    fn for_each_index(mut f: impl FnMut(usize)) {
        f(N::VALUE);
        Rest::for_each_index(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Iota<Z>, ());
    assert_type_eq_all!(IndexSequence<2>, (Z, (S<Z>, ())));
    assert_type_eq_all!(OffsetSequence<1, 1>, (S<Z>, ()));
    assert_type_eq_all!(Indices![1, 0,], (S<Z>, (Z, ())));
    assert_type_eq_all!(
        <Indices![0, 1, 2] as Swapped<UnaryOf<2>, UnaryOf<2>>>::Output,
        Indices![0, 1, 2]
    );

    #[test]
    fn sequences_reflect_to_runtime() {
        assert_eq!(<IndexSequence<0> as IndexList>::to_vec(), Vec::<usize>::new());
        assert_eq!(<IndexSequence<6> as IndexList>::LEN, 6);
        assert_eq!(<Indices![1, 4, 3, 2, 1, 0] as IndexList>::to_vec(), vec![1, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn swapping_is_symmetric() {
        type Forward = <IndexSequence<4> as Swapped<UnaryOf<0>, UnaryOf<3>>>::Output;
        type Backward = <IndexSequence<4> as Swapped<UnaryOf<3>, UnaryOf<0>>>::Output;
        assert_eq!(<Forward as IndexList>::to_vec(), vec![3, 1, 2, 0]);
        assert_eq!(<Forward as IndexList>::to_vec(), <Backward as IndexList>::to_vec());
    }
}
