//! Element-wise transformations which change the types of a list's elements.

use std::{
    any::TypeId,
    borrow::Cow,
    cell::{Cell, RefCell},
    cmp::{Ordering, Reverse},
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    error::Error,
    ffi::{CString, OsString},
    fs::File,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Saturating, Wrapping,
    },
    ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive},
    path::PathBuf,
    rc::Rc,
    sync::{
        atomic::{
            AtomicBool, AtomicI16, AtomicI32, AtomicI8, AtomicIsize, AtomicU16, AtomicU32, AtomicU8,
            AtomicUsize,
        },
        Arc, Mutex, RwLock,
    },
    time::{Duration, Instant, SystemTime},
};

use crate::{call::Call, error::ConvertError};

/// Turn a value into an owned value, cloning through references.
///
/// A shared or unique reference resolves to the [`ToOwned`] form of its referent: a clone for
/// sized referents, and `String`, `Vec<T>`, `PathBuf` and so on for `str`, `[T]`, `Path`. Every
/// owned type resolves to itself, by moving. Implementations for owned types outside this crate
/// can be derived:
///
/// ```
/// use reshape::{Record, Resolve};
///
/// #[derive(Debug, Clone, PartialEq, Resolve)]
/// struct Point(i32, i32);
///
/// let origin = Point(0, 0);
/// let record = (&origin, Point(1, 1));
/// assert_eq!(record.resolve_refs(), (Point(0, 0), Point(1, 1)));
/// ```
pub trait Resolve {
    /// The owned type this resolves to.
    type Resolved;

    /// Resolve `self` into an owned value.
    fn resolve(self) -> Self::Resolved;
}

impl<'a, T: ?Sized + ToOwned> Resolve for &'a T {
    type Resolved = T::Owned;

    fn resolve(self) -> T::Owned {
        T::to_owned(self)
    }
}

impl<'a, T: ?Sized + ToOwned> Resolve for &'a mut T {
    type Resolved = T::Owned;

    fn resolve(self) -> T::Owned {
        T::to_owned(self)
    }
}

macro_rules! resolve_to_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Resolve for $ty {
                type Resolved = Self;

                fn resolve(self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! resolve_generic_to_self {
    ($([$($param:ident $(: ?$relax:ident)?),+] $ty:ty),* $(,)?) => {
        $(
            impl<$($param $(: ?$relax)?),+> Resolve for $ty {
                type Resolved = Self;

                fn resolve(self) -> Self {
                    self
                }
            }
        )*
    };
}

resolve_to_self!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    PathBuf, OsString, CString, File, TypeId, Ordering,
    Duration, Instant, SystemTime,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    AtomicBool, AtomicU8, AtomicU16, AtomicU32, AtomicUsize,
    AtomicI8, AtomicI16, AtomicI32, AtomicIsize,
);

#[cfg(target_has_atomic = "64")]
resolve_to_self!(std::sync::atomic::AtomicU64, std::sync::atomic::AtomicI64);

resolve_generic_to_self!(
    [T] Vec<T>,
    [T] Option<T>,
    [T, E] Result<T, E>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T: ?Sized] PhantomData<T>,
    [T] Wrapping<T>,
    [T] Saturating<T>,
    [T] Reverse<T>,
    [T] Range<T>,
    [T] RangeFrom<T>,
    [T] RangeInclusive<T>,
    [T] RangeTo<T>,
    [T] RangeToInclusive<T>,
    [T] Cell<T>,
    [T] RefCell<T>,
    [T] Mutex<T>,
    [T] RwLock<T>,
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
    [A, B, C, R] fn(A, B, C) -> R,
    [A, B, C, D, R] fn(A, B, C, D) -> R,
);

impl<T, const N: usize> Resolve for [T; N] {
    type Resolved = Self;

    fn resolve(self) -> Self {
        self
    }
}

impl<'a, B: ?Sized + ToOwned> Resolve for Cow<'a, B> {
    type Resolved = Self;

    fn resolve(self) -> Self {
        self
    }
}

reshape_macro::impl_tuple_resolve!(64);

/// Resolve every element of a list.
pub trait ResolveEach {
    /// The list of resolved elements.
    type Output;

    /// Resolve every element, front to back.
    fn resolve_each(self) -> Self::Output;
}

impl ResolveEach for () {
    type Output = ();

    fn resolve_each(self) {}
}

impl<H: Resolve, T: ResolveEach> ResolveEach for (H, T) {
    type Output = (H::Resolved, T::Output);

    fn resolve_each(self) -> Self::Output {
        let (head, tail) = self;
        (head.resolve(), tail.resolve_each())
    }
}

/// Apply a [`Call`] to every element of a list by value, collecting the outputs.
pub trait Map<F> {
    /// The list of outputs.
    type Output;

    /// Call `f` on every element, front to back.
    fn map_each(self, f: &mut F) -> Self::Output;
}

impl<F> Map<F> for () {
    type Output = ();

    fn map_each(self, _: &mut F) {}
}

impl<F: Call<H>, H, T: Map<F>> Map<F> for (H, T) {
    type Output = (F::Output, T::Output);

    fn map_each(self, f: &mut F) -> Self::Output {
        let (head, tail) = self;
        let head = <F as Call<H>>::call(f, head);
        (head, tail.map_each(f))
    }
}

/// Convert every element of a list into the corresponding element type of `Target`, using
/// [`Into`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted element-wise into `{Target}`",
    label = "each slot must convert into the slot at the same index, and the arities must match"
)]
pub trait ConvertEach<Target> {
    /// Convert every element, front to back.
    fn convert_each(self) -> Target;
}

impl ConvertEach<()> for () {
    fn convert_each(self) {}
}

impl<H: Into<U>, T: ConvertEach<TU>, U, TU> ConvertEach<(U, TU)> for (H, T) {
    fn convert_each(self) -> (U, TU) {
        let (head, tail) = self;
        (head.into(), tail.convert_each())
    }
}

/// Fallibly convert every element of a list into the corresponding element type of `Target`,
/// using [`TryInto`], stopping at the first failure.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted element-wise into `{Target}`",
    label = "each slot must convert into the slot at the same index, and the arities must match"
)]
pub trait TryConvertEach<Target> {
    /// Convert every element, front to back; `index` is the position of the first element
    /// within the whole record, used to report which slot failed.
    fn try_convert_each(self, index: usize) -> Result<Target, ConvertError>;
}

impl TryConvertEach<()> for () {
    fn try_convert_each(self, _: usize) -> Result<(), ConvertError> {
        Ok(())
    }
}

impl<H, T, U, TU> TryConvertEach<(U, TU)> for (H, T)
where
    H: TryInto<U>,
    H::Error: Error + Send + Sync + 'static,
    T: TryConvertEach<TU>,
{
    fn try_convert_each(self, index: usize) -> Result<(U, TU), ConvertError> {
        let (head, tail) = self;
        let head = TryInto::<U>::try_into(head)
            .map_err(|source| ConvertError::new::<U>(index, source))?;
        Ok((head, tail.try_convert_each(index + 1)?))
    }
}
