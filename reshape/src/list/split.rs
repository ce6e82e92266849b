//! Splitting lists apart and joining them back together.

use super::Concat;
use crate::{
    tuple::{List, Tuple},
    unary::{Unary, S, Z},
};

/// Split a list into its first `N` elements and the rest; `N` may equal the length of the list.
#[diagnostic::on_unimplemented(
    message = "cannot split `{Self}` at index `{N}`",
    label = "split point is past the end"
)]
pub trait SplitAt<N: Unary> {
    /// The first `N` elements.
    type Front;
    /// Every element after the first `N`.
    type Back;

    /// Split the list after its first `N` elements.
    fn split_at(self) -> (Self::Front, Self::Back);
}

impl<L> SplitAt<Z> for L {
    type Front = ();
    type Back = L;

    fn split_at(self) -> ((), L) {
        ((), self)
    }
}

impl<N: Unary, H, T: SplitAt<N>> SplitAt<S<N>> for (H, T) {
    type Front = (H, T::Front);
    type Back = T::Back;

    fn split_at(self) -> (Self::Front, T::Back) {
        let (head, tail) = self;
        let (front, back) = <T as SplitAt<N>>::split_at(tail);
        ((head, front), back)
    }
}

/// Group a list into consecutive tuples of `K` elements each.
///
/// Only non-zero chunk sizes which evenly divide the length of the list are accepted: the final
/// chunk can never come up short.
///
/// # Examples
///
/// ```
/// use reshape::list::Chunks;
/// use reshape::unary::UnaryOf;
///
/// let list = (1, ('a', (2, ('b', ()))));
/// assert_eq!(<_ as Chunks<UnaryOf<2>>>::chunks(list), ((1, 'a'), ((2, 'b'), ())));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be divided into chunks of size `{K}`",
    label = "the chunk size must be non-zero and divide the number of slots"
)]
pub trait Chunks<K: Unary> {
    /// The list of chunks, each one a tuple.
    type Output;

    /// Group the list into chunks.
    fn chunks(self) -> Self::Output;
}

impl<K: Unary> Chunks<S<K>> for () {
    type Output = ();

    fn chunks(self) {}
}

impl<K: Unary, H, T> Chunks<S<K>> for (H, T)
where
    (H, T): SplitAt<S<K>>,
    <(H, T) as SplitAt<S<K>>>::Front: List,
    <(H, T) as SplitAt<S<K>>>::Back: Chunks<S<K>>,
{
    type Output = (
        <<(H, T) as SplitAt<S<K>>>::Front as List>::AsTuple,
        <<(H, T) as SplitAt<S<K>>>::Back as Chunks<S<K>>>::Output,
    );

    fn chunks(self) -> Self::Output {
        let (front, back) = <(H, T) as SplitAt<S<K>>>::split_at(self);
        (front.into_tuple(), back.chunks())
    }
}

/// Concatenate a list of tuples into one list of all their elements.
pub trait Flatten {
    /// The concatenation of every tuple's elements.
    type Output;

    /// Flatten the list of tuples.
    fn flatten(self) -> Self::Output;
}

impl Flatten for () {
    type Output = ();

    fn flatten(self) {}
}

impl<H: Tuple, T: Flatten> Flatten for (H, T)
where
    H::AsList: Concat<T::Output>,
{
    type Output = <H::AsList as Concat<T::Output>>::Output;

    fn flatten(self) -> Self::Output {
        let (head, tail) = self;
        head.into_list().concat(tail.flatten())
    }
}

/// Interleave two lists of equal length: `[a0, b0, a1, b1, ...]`.
#[diagnostic::on_unimplemented(
    message = "cannot interleave `{Self}` with `{R}`",
    label = "both sides must have the same number of slots"
)]
pub trait Interleave<R> {
    /// The interleaved list.
    type Output;

    /// Interleave this list with `other`, starting with this list's first element.
    fn interleave(self, other: R) -> Self::Output;
}

impl Interleave<()> for () {
    type Output = ();

    fn interleave(self, _: ()) {}
}

impl<A, TA, B, TB> Interleave<(B, TB)> for (A, TA)
where
    TA: Interleave<TB>,
{
    type Output = (A, (B, TA::Output));

    fn interleave(self, other: (B, TB)) -> Self::Output {
        let (a, rest_a) = self;
        let (b, rest_b) = other;
        (a, (b, rest_a.interleave(rest_b)))
    }
}

/// Separate a list of even length into its elements at even indices and those at odd indices.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be split into alternating halves",
    label = "the number of slots must be even"
)]
pub trait AlternatingSplit {
    /// The elements at indices `0, 2, 4, ...`.
    type Evens;
    /// The elements at indices `1, 3, 5, ...`.
    type Odds;

    /// Separate even-indexed elements from odd-indexed elements.
    fn alternating_split(self) -> (Self::Evens, Self::Odds);
}

impl AlternatingSplit for () {
    type Evens = ();
    type Odds = ();

    fn alternating_split(self) -> ((), ()) {
        ((), ())
    }
}

impl<A, B, T: AlternatingSplit> AlternatingSplit for (A, (B, T)) {
    type Evens = (A, T::Evens);
    type Odds = (B, T::Odds);

    fn alternating_split(self) -> (Self::Evens, Self::Odds) {
        let (a, (b, rest)) = self;
        let (evens, odds) = rest.alternating_split();
        ((a, evens), (b, odds))
    }
}
