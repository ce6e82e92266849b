//! Polymorphic functions which can be called on every slot of a heterogeneous record.
//!
//! Ordinary closures have exactly one argument type, but the slots of a record generally do not
//! share a type. A [`Call`] implementation may be called with many argument types, one impl per
//! type (or one generic impl for a whole family of types). Write one by hand, or build one from
//! several closures with [`overload!`](crate::overload).

use std::marker::PhantomData;

use crate::list::Resolve;

/// A function which may be called with an argument of type `Arg`.
///
/// # Examples
///
/// ```
/// use reshape::{Call, Record};
///
/// struct Width;
///
/// impl<'a> Call<&'a str> for Width {
///     type Output = usize;
///
///     fn call(&mut self, arg: &'a str) -> usize {
///         arg.len()
///     }
/// }
///
/// impl Call<u64> for Width {
///     type Output = usize;
///
///     fn call(&mut self, arg: u64) -> usize {
///         arg.to_string().len()
///     }
/// }
///
/// assert_eq!(("four", 12345_u64).type_transform(Width), (4, 5));
/// ```
pub trait Call<Arg> {
    /// The result of the call.
    type Output;

    /// Call this function with `arg`.
    fn call(&mut self, arg: Arg) -> Self::Output;
}

impl<'f, Arg, F: Call<Arg>> Call<Arg> for &'f mut F {
    type Output = F::Output;

    fn call(&mut self, arg: Arg) -> F::Output {
        F::call(self, arg)
    }
}

/// Resolve a slot to an owned value: a reference is cloned, an owned value moves through.
///
/// This is [`resolve_refs`](crate::Record::resolve_refs) as a single-slot function, for use with
/// [`type_transform`](crate::Record::type_transform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Resolved;

impl<T: Resolve> Call<T> for Resolved {
    type Output = T::Resolved;

    fn call(&mut self, arg: T) -> T::Resolved {
        arg.resolve()
    }
}

/// Convert a slot into `U` by [`Into`].
///
/// ```
/// use reshape::{Converted, Record};
///
/// assert_eq!((1_u8, 2_u16, 3_u32).type_transform(Converted::<u64>::new()), (1, 2, 3));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Converted<U> {
    target: PhantomData<fn() -> U>,
}

impl<U> Converted<U> {
    /// Construct the conversion into `U`.
    pub fn new() -> Self {
        Converted {
            target: PhantomData,
        }
    }
}

impl<T: Into<U>, U> Call<T> for Converted<U> {
    type Output = U;

    fn call(&mut self, arg: T) -> U {
        arg.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_twice<F: Call<u8, Output = u8>>(mut f: F) -> u8 {
        let once = f.call(1);
        f.call(once)
    }

    struct Double;

    impl Call<u8> for Double {
        type Output = u8;

        fn call(&mut self, arg: u8) -> u8 {
            arg * 2
        }
    }

    #[test]
    fn mutable_references_forward() {
        let mut double = Double;
        assert_eq!(apply_twice(&mut double), 4);
        assert_eq!(apply_twice(double), 4);
    }

    #[test]
    fn resolved_clones_through_references() {
        let text = String::from("owned");
        assert_eq!(Resolved.call(&text), text);
        assert_eq!(Resolved.call(5_u8), 5);
    }
}
