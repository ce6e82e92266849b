//! Selecting elements by index sequence, either by copying references or by moving elements.

use super::Get;
use crate::{
    index::{Iota, Range, Swapped},
    tuple::HasLength,
    unary::{LessThan, Unary, S, Z},
};

/// Select elements from a list of `Copy` elements (in practice, a list of references) according
/// to the index sequence `Self`. Indices may repeat or be omitted.
pub trait Pick<L> {
    /// The selected elements, in index-sequence order.
    type Output;

    /// Select from `list` in index-sequence order.
    fn pick(list: L) -> Self::Output;
}

impl<L> Pick<L> for () {
    type Output = ();

    fn pick(_: L) {}
}

impl<L, I, Rest> Pick<L> for (I, Rest)
where
    L: Copy + Get<I>,
    I: Unary,
    Rest: Pick<L>,
{
    type Output = (<L as Get<I>>::Item, Rest::Output);

    fn pick(list: L) -> Self::Output {
        (<L as Get<I>>::into_item(list), Rest::pick(list))
    }
}

/// Clone each element behind a list of shared references, front to back.
pub trait ClonedEach {
    /// The list of owned clones.
    type Output;

    /// Clone every referenced element, in order.
    fn cloned_each(self) -> Self::Output;
}

impl ClonedEach for () {
    type Output = ();

    fn cloned_each(self) {}
}

impl<'a, X: Clone + 'a, T: ClonedEach> ClonedEach for (&'a X, T) {
    type Output = (X, T::Output);

    fn cloned_each(self) -> Self::Output {
        let (head, tail) = self;
        (X::clone(head), tail.cloned_each())
    }
}

/// A list slot whose element has not yet been moved out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Occupied<T>(pub T);

/// A list slot whose element has already been moved out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vacant;

/// Mark every slot of a list as [`Occupied`], in preparation for moving elements out with
/// [`Take`].
pub trait Occupy {
    /// The list with every element wrapped in [`Occupied`].
    type Occupied;

    /// Wrap every element in [`Occupied`].
    fn occupy(self) -> Self::Occupied;
}

impl Occupy for () {
    type Occupied = ();

    fn occupy(self) {}
}

impl<H, T: Occupy> Occupy for (H, T) {
    type Occupied = (Occupied<H>, T::Occupied);

    fn occupy(self) -> Self::Occupied {
        let (head, tail) = self;
        (Occupied(head), tail.occupy())
    }
}

/// Move the element at index `N` out of an occupied list, leaving a [`Vacant`] slot behind.
///
/// Because a vacated slot cannot be taken from again, a sequence of takes which names any index
/// twice fails to compile.
#[diagnostic::on_unimplemented(
    message = "slot `{N}` is out of bounds, or was already moved out of `{Self}`",
    label = "each index may be used at most once"
)]
pub trait Take<N: Unary> {
    /// The element which was moved out.
    type Item;
    /// The list with slot `N` vacated.
    type Rest;

    /// Move out the element at index `N`.
    fn take_slot(self) -> (Self::Item, Self::Rest);
}

impl<H, T> Take<Z> for (Occupied<H>, T) {
    type Item = H;
    type Rest = (Vacant, T);

    fn take_slot(self) -> (H, (Vacant, T)) {
        let (Occupied(head), tail) = self;
        (head, (Vacant, tail))
    }
}

impl<N: Unary, X, T: Take<N>> Take<S<N>> for (X, T) {
    type Item = T::Item;
    type Rest = (X, T::Rest);

    fn take_slot(self) -> (T::Item, Self::Rest) {
        let (head, tail) = self;
        let (item, rest) = <T as Take<N>>::take_slot(tail);
        (item, (head, rest))
    }
}

/// Move elements out of an occupied list according to the index sequence `Self`. Indices may be
/// omitted (those elements are dropped), but never repeated.
pub trait Pluck<L> {
    /// The moved elements, in index-sequence order.
    type Output;

    /// Move elements out of `list` in index-sequence order.
    fn pluck(list: L) -> Self::Output;
}

impl<L> Pluck<L> for () {
    type Output = ();

    fn pluck(_: L) {}
}

impl<L, I, Rest> Pluck<L> for (I, Rest)
where
    L: Take<I>,
    I: Unary,
    Rest: Pluck<L::Rest>,
{
    type Output = (L::Item, Rest::Output);

    fn pluck(list: L) -> Self::Output {
        let (item, rest) = <L as Take<I>>::take_slot(list);
        (item, Rest::pluck(rest))
    }
}

/// Move the elements of a list into the order given by the index sequence `Ix`.
///
/// # Examples
///
/// ```
/// use reshape::list::Permute;
/// use reshape::Indices;
///
/// let list = (String::from("a"), (String::from("b"), (String::from("c"), ())));
/// let permuted = <_ as Permute<Indices![2, 0]>>::permute(list);
/// assert_eq!(permuted, (String::from("c"), (String::from("a"), ())));
/// ```
pub trait Permute<Ix> {
    /// The permuted list.
    type Output;

    /// Move every selected element into its new position.
    fn permute(self) -> Self::Output;
}

impl<L: Occupy, Ix: Pluck<L::Occupied>> Permute<Ix> for L {
    type Output = Ix::Output;

    fn permute(self) -> Ix::Output {
        Ix::pluck(self.occupy())
    }
}

/// Exchange the elements at indices `I` and `J`; when `I` and `J` are equal, nothing moves.
#[diagnostic::on_unimplemented(
    message = "cannot swap slots `{I}` and `{J}` of `{Self}`",
    label = "both indices must be in bounds"
)]
pub trait ElemSwap<I: Unary, J: Unary> {
    /// The list with the two elements exchanged.
    type Output;

    /// Exchange the elements at indices `I` and `J`.
    fn elem_swap(self) -> Self::Output;
}

impl<I, J, L> ElemSwap<I, J> for L
where
    L: HasLength + Occupy,
    I: LessThan<L::Length>,
    J: LessThan<L::Length>,
    L::Length: Range<Z>,
    Iota<L::Length>: Swapped<I, J>,
    <Iota<L::Length> as Swapped<I, J>>::Output: Pluck<L::Occupied>,
{
    type Output = <<Iota<L::Length> as Swapped<I, J>>::Output as Pluck<L::Occupied>>::Output;

    fn elem_swap(self) -> Self::Output {
        <<Iota<L::Length> as Swapped<I, J>>::Output as Pluck<L::Occupied>>::pluck(self.occupy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{unary::UnaryOf, Indices};
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Three = (u8, (u16, (u32, ())));

    assert_impl_all!(Three: Permute<Indices![2, 1, 0]>, Permute<Indices![1]>);
    assert_not_impl_any!(Three: Permute<Indices![0, 0]>, Permute<Indices![3]>);
    assert_impl_all!(Three: ElemSwap<UnaryOf<1>, UnaryOf<1>>);
    assert_not_impl_any!(Three: ElemSwap<UnaryOf<0>, UnaryOf<3>>);
    assert_type_eq_all!(
        <Three as ElemSwap<UnaryOf<0>, UnaryOf<2>>>::Output,
        (u32, (u16, (u8, ())))
    );

    #[test]
    fn pick_may_repeat_indices() {
        let a = 1u8;
        let b = 'b';
        let refs = (&a, (&b, ()));
        let (first, (second, (third, ()))) = <Indices![1, 0, 1] as Pick<_>>::pick(refs);
        assert_eq!((*first, *second, *third), ('b', 1, 'b'));
        assert!(std::ptr::eq(first, third));
    }

    #[test]
    fn cloned_each_clones_in_order() {
        let words = (String::from("x"), String::from("y"));
        assert_eq!(
            (&words.0, (&words.1, ())).cloned_each(),
            (String::from("x"), (String::from("y"), ()))
        );
    }

    #[test]
    fn swap_moves_owned_elements() {
        let list = (vec![1], (String::from("mid"), (Box::new(3), ())));
        let swapped = <_ as ElemSwap<UnaryOf<0>, UnaryOf<2>>>::elem_swap(list);
        assert_eq!(swapped, (Box::new(3), (String::from("mid"), (vec![1], ()))));
    }
}
