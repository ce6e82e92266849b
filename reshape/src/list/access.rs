use crate::unary::{Unary, S, Z};

/// Take the element at index `N` out of a list, discarding the rest.
///
/// Applied to a list of references, this is element access.
///
/// # Examples
///
/// ```
/// use reshape::list::Get;
/// use reshape::unary::UnaryOf;
///
/// let list = ('a', ("b", (3, ())));
/// assert_eq!(<_ as Get<UnaryOf<1>>>::into_item(list), "b");
/// ```
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of bounds for `{Self}`",
    label = "no slot at this index"
)]
pub trait Get<N: Unary> {
    /// The element at index `N`.
    type Item;

    /// Extract the element at index `N`.
    fn into_item(self) -> Self::Item;
}

impl<H, T> Get<Z> for (H, T) {
    type Item = H;

    fn into_item(self) -> H {
        self.0
    }
}

impl<H, T: Get<N>, N: Unary> Get<S<N>> for (H, T) {
    type Item = T::Item;

    fn into_item(self) -> T::Item {
        T::into_item(self.1)
    }
}

/// Split a non-empty list into its first element and the remainder.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no first slot",
    label = "this operation needs at least one slot"
)]
pub trait SplitFirst {
    /// The first element.
    type First;
    /// Everything after the first element.
    type Rest;

    /// Separate the first element from the rest of the list.
    fn split_first(self) -> (Self::First, Self::Rest);
}

impl<H, T> SplitFirst for (H, T) {
    type First = H;
    type Rest = T;

    fn split_first(self) -> (H, T) {
        self
    }
}

/// Split a non-empty list into everything before its last element, and its last element.
///
/// # Examples
///
/// ```
/// use reshape::list::SplitLast;
///
/// assert_eq!((1, (2, (3, ()))).split_last(), ((1, (2, ())), 3));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no last slot",
    label = "this operation needs at least one slot"
)]
pub trait SplitLast {
    /// Everything before the last element.
    type Init;
    /// The last element.
    type Last;

    /// Separate the last element from the rest of the list.
    fn split_last(self) -> (Self::Init, Self::Last);
}

impl<H, T: Unsnoc<H>> SplitLast for (H, T) {
    type Init = T::Init;
    type Last = T::Last;

    fn split_last(self) -> (T::Init, T::Last) {
        let (head, tail) = self;
        tail.unsnoc(head)
    }
}

/// Find the last element of `Prev` followed by `Self`, carrying the most recently seen element
/// along until the end of the list is reached.
pub trait Unsnoc<Prev> {
    /// Everything before the last element.
    type Init;
    /// The last element.
    type Last;

    /// Separate `prev` and this list into everything-but-the-last and the last.
    fn unsnoc(self, prev: Prev) -> (Self::Init, Self::Last);
}

impl<Prev> Unsnoc<Prev> for () {
    type Init = ();
    type Last = Prev;

    fn unsnoc(self, prev: Prev) -> ((), Prev) {
        ((), prev)
    }
}

impl<Prev, H, T: Unsnoc<H>> Unsnoc<Prev> for (H, T) {
    type Init = (Prev, T::Init);
    type Last = T::Last;

    fn unsnoc(self, prev: Prev) -> (Self::Init, T::Last) {
        let (head, tail) = self;
        let (init, last) = tail.unsnoc(head);
        ((prev, init), last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_impl_all!((u8, (u16, ())): Get<UnaryOf<1>>);
    assert_not_impl_any!((u8, (u16, ())): Get<UnaryOf<2>>);
    assert_not_impl_any!((): SplitFirst, SplitLast);
    assert_type_eq_all!(<(u8, (u16, (u32, ()))) as SplitLast>::Init, (u8, (u16, ())));
    assert_type_eq_all!(<(u8, ()) as SplitLast>::Last, u8);

    #[test]
    fn get_moves_out_the_selected_element() {
        let list = (String::from("zero"), (String::from("one"), ()));
        assert_eq!(<_ as Get<UnaryOf<1>>>::into_item(list), "one");
    }

    #[test]
    fn split_last_of_a_singleton() {
        assert_eq!(('x', ()).split_last(), ((), 'x'));
    }
}
