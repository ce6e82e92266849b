use super::SplitLast;
use crate::unary::{Unary, S, Z};

/// Add an element to the end of a list.
pub trait PushBack<V> {
    /// The list with `V` added at the end.
    type Output;

    /// Add `value` to the end of the list.
    fn push_back(self, value: V) -> Self::Output;
}

impl<V> PushBack<V> for () {
    type Output = (V, ());

    fn push_back(self, value: V) -> (V, ()) {
        (value, ())
    }
}

impl<V, H, T: PushBack<V>> PushBack<V> for (H, T) {
    type Output = (H, T::Output);

    fn push_back(self, value: V) -> Self::Output {
        let (head, tail) = self;
        (head, tail.push_back(value))
    }
}

/// Concatenate two lists.
///
/// # Examples
///
/// ```
/// use reshape::list::Concat;
///
/// assert_eq!((1, (2, ())).concat(('c', ())), (1, (2, ('c', ()))));
/// ```
pub trait Concat<R> {
    /// All the elements of `Self` followed by all the elements of `R`.
    type Output;

    /// Concatenate `other` onto the end of this list.
    fn concat(self, other: R) -> Self::Output;
}

impl<R> Concat<R> for () {
    type Output = R;

    fn concat(self, other: R) -> R {
        other
    }
}

impl<R, H, T: Concat<R>> Concat<R> for (H, T) {
    type Output = (H, T::Output);

    fn concat(self, other: R) -> Self::Output {
        let (head, tail) = self;
        (head, tail.concat(other))
    }
}

/// Insert an element so that it lands at index `N`; `N` may equal the length of the list.
#[diagnostic::on_unimplemented(
    message = "cannot insert at index `{N}` into `{Self}`",
    label = "insertion index is past the end"
)]
pub trait Insert<N: Unary, V> {
    /// The list with `V` inserted at index `N`.
    type Output;

    /// Insert `value` at index `N`.
    fn insert(self, value: V) -> Self::Output;
}

impl<L, V> Insert<Z, V> for L {
    type Output = (V, L);

    fn insert(self, value: V) -> (V, L) {
        (value, self)
    }
}

impl<N: Unary, V, H, T: Insert<N, V>> Insert<S<N>, V> for (H, T) {
    type Output = (H, T::Output);

    fn insert(self, value: V) -> Self::Output {
        let (head, tail) = self;
        (head, <T as Insert<N, V>>::insert(tail, value))
    }
}

/// Remove the element at index `N`.
#[diagnostic::on_unimplemented(
    message = "cannot remove index `{N}` from `{Self}`",
    label = "no slot at this index"
)]
pub trait Remove<N: Unary> {
    /// The removed element.
    type Removed;
    /// The list without the element at index `N`.
    type Output;

    /// Remove the element at index `N`, returning it alongside the rest of the list.
    fn remove(self) -> (Self::Removed, Self::Output);
}

impl<H, T> Remove<Z> for (H, T) {
    type Removed = H;
    type Output = T;

    fn remove(self) -> (H, T) {
        self
    }
}

impl<N: Unary, H, T: Remove<N>> Remove<S<N>> for (H, T) {
    type Removed = T::Removed;
    type Output = (H, T::Output);

    fn remove(self) -> (T::Removed, Self::Output) {
        let (head, tail) = self;
        let (removed, rest) = tail.remove();
        (removed, (head, rest))
    }
}

/// Replace the element at index `N` with a value of any type.
#[diagnostic::on_unimplemented(
    message = "cannot replace index `{N}` of `{Self}`",
    label = "no slot at this index"
)]
pub trait Replace<N: Unary, V> {
    /// The element which was replaced.
    type Replaced;
    /// The list with `V` in place of the element at index `N`.
    type Output;

    /// Replace the element at index `N` with `value`, returning the old element alongside the new
    /// list.
    fn replace(self, value: V) -> (Self::Replaced, Self::Output);
}

impl<V, H, T> Replace<Z, V> for (H, T) {
    type Replaced = H;
    type Output = (V, T);

    fn replace(self, value: V) -> (H, (V, T)) {
        let (head, tail) = self;
        (head, (value, tail))
    }
}

impl<N: Unary, V, H, T: Replace<N, V>> Replace<S<N>, V> for (H, T) {
    type Replaced = T::Replaced;
    type Output = (H, T::Output);

    fn replace(self, value: V) -> (T::Replaced, Self::Output) {
        let (head, tail) = self;
        let (replaced, rest) = tail.replace(value);
        (replaced, (head, rest))
    }
}

/// Reverse a list onto the front of an accumulator.
pub trait ReverseOnto<Acc> {
    /// The reversed list followed by `Acc`.
    type Output;

    /// Move the elements of this list, last first, onto the front of `acc`.
    fn reverse_onto(self, acc: Acc) -> Self::Output;
}

impl<Acc> ReverseOnto<Acc> for () {
    type Output = Acc;

    fn reverse_onto(self, acc: Acc) -> Acc {
        acc
    }
}

impl<Acc, H, T: ReverseOnto<(H, Acc)>> ReverseOnto<Acc> for (H, T) {
    type Output = T::Output;

    fn reverse_onto(self, acc: Acc) -> T::Output {
        let (head, tail) = self;
        tail.reverse_onto((head, acc))
    }
}

/// Rotate a list left by one: the first element moves to the end. The empty list is unchanged.
pub trait RotateLeft {
    /// The rotated list.
    type Output;

    /// Rotate the list left by one position.
    fn rotate_left(self) -> Self::Output;
}

impl RotateLeft for () {
    type Output = ();

    fn rotate_left(self) {}
}

impl<H, T: PushBack<H>> RotateLeft for (H, T) {
    type Output = T::Output;

    fn rotate_left(self) -> T::Output {
        let (head, tail) = self;
        tail.push_back(head)
    }
}

/// Rotate a list right by one: the last element moves to the front. The empty list is unchanged.
pub trait RotateRight {
    /// The rotated list.
    type Output;

    /// Rotate the list right by one position.
    fn rotate_right(self) -> Self::Output;
}

impl RotateRight for () {
    type Output = ();

    fn rotate_right(self) {}
}

impl<H, T> RotateRight for (H, T)
where
    (H, T): SplitLast,
{
    type Output = (
        <(H, T) as SplitLast>::Last,
        <(H, T) as SplitLast>::Init,
    );

    fn rotate_right(self) -> Self::Output {
        let (init, last) = self.split_last();
        (last, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_impl_all!((u8, (u8, ())): Insert<UnaryOf<2>, char>);
    assert_not_impl_any!((u8, (u8, ())): Insert<UnaryOf<3>, char>);
    assert_not_impl_any!((u8, (u8, ())): Remove<UnaryOf<2>>);
    assert_type_eq_all!(<(u8, (u16, ())) as ReverseOnto<()>>::Output, (u16, (u8, ())));
    assert_type_eq_all!(<(u8, (u16, (u32, ()))) as RotateRight>::Output, (u32, (u8, (u16, ()))));

    #[test]
    fn insert_at_the_end_is_push_back() {
        let list = (1u8, (2u16, ()));
        assert_eq!(
            <_ as Insert<UnaryOf<2>, _>>::insert(list, 'z'),
            list.push_back('z')
        );
    }

    #[test]
    fn remove_then_insert_restores_the_list() {
        let list = ('a', ("b", (3u32, ())));
        let (removed, rest) = <_ as Remove<UnaryOf<1>>>::remove(list);
        assert_eq!(removed, "b");
        assert_eq!(<_ as Insert<UnaryOf<1>, _>>::insert(rest, removed), list);
    }

    #[test]
    fn replace_hands_back_the_old_element() {
        let (old, new) = <_ as Replace<UnaryOf<0>, _>>::replace((1u8, (true, ())), "one");
        assert_eq!(old, 1);
        assert_eq!(new, ("one", (true, ())));
    }

    #[test]
    fn rotations_of_a_singleton_are_identity() {
        assert_eq!(('q', ()).rotate_left(), ('q', ()));
        assert_eq!(('q', ()).rotate_right(), ('q', ()));
    }
}
