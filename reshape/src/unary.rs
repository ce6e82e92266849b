//! Type-level natural numbers in unary: [`Z`] is zero and [`S<N>`](S) is one more than `N`.
//!
//! Every position this crate checks at compile time (a slot index, a split point, a chunk size) is
//! one of these. Users write ordinary `usize` constants; [`UnaryOf`] translates a constant into
//! its unary form so that the list traits can recurse on it.

/// Zero.
///
/// ```
/// use reshape::unary::{Unary, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
///
/// ```
/// use reshape::unary::{Unary, S, Z};
///
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number for the constant `N`, which may be at most 64.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary number, reflected back to runtime as a `usize`.
///
/// ```
/// use reshape::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// How many successors this number has.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Holds when `Self < N`. This is how every index is bounds-checked: an index into a record of
/// length `N` is valid exactly when it is `LessThan<N>`.
///
/// ```
/// use reshape::unary::{LessThan, UnaryOf};
///
/// fn in_bounds() where UnaryOf<2>: LessThan<UnaryOf<3>> {}
/// ```
///
/// The comparison is strict, so a record's length is never a valid index into it:
///
/// ```compile_fail
/// use reshape::unary::{LessThan, UnaryOf};
///
/// fn at_the_end() where UnaryOf<3>: LessThan<UnaryOf<3>> {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not strictly less than `{N}`",
    label = "index out of bounds"
)]
pub trait LessThan<N: Unary>: Unary {}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Choose one of three types according to how the pair `(Left, Right)` compares.
///
/// ```
/// use reshape::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// type Pick<L, R> = <(L, R) as Compare<&'static str, char, bool>>::Result;
///
/// assert_type_eq_all!(Pick<UnaryOf<0>, UnaryOf<4>>, &'static str);
/// assert_type_eq_all!(Pick<UnaryOf<4>, UnaryOf<4>>, char);
/// assert_type_eq_all!(Pick<UnaryOf<5>, UnaryOf<4>>, bool);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// `IfLess` when `Left < Right`, `IfEqual` when they are equal, and `IfGreater` otherwise.
    type Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

/// A `usize` constant lifted into a type, so that traits can be implemented on it.
#[allow(missing_debug_implementations, missing_copy_implementations)]
pub struct Number<const N: usize>;

/// Implemented only by [`Number`].
pub trait Constant: sealed::Constant {}

impl<const N: usize> Constant for Number<N> {}

/// Translate a lifted constant into its unary form. Implemented for every constant up to 64.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is larger than the largest supported index constant (64)"
)]
pub trait ToUnary {
    /// The unary form.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Translate a unary number back into a lifted constant; the inverse of [`ToUnary`].
pub trait ToConstant: Unary {
    /// The lifted constant.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

reshape_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::{Number, S, Z};

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: super::Unary, M: super::Unary> Compare for (N, M) {}
}
