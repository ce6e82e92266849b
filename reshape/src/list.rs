//! Operations on inductive type-level lists.
//!
//! Each trait here performs one structural step on a list `(H, (I, (J, ())))`, computing the
//! shape of its result as an associated type and building the result value by moving the
//! elements it selects. They are implemented inductively: once for the empty list `()`, and once
//! for a cons cell `(H, T)` in terms of the same operation on `T`. When a constraint such as an
//! index bound is violated, the induction runs out of impls and the trait is simply not
//! implemented, which turns the violation into a compile-time error.
//!
//! Most users never name these traits directly; the [`Record`](crate::Record) extension trait
//! drives them from ordinary tuples.

mod access;
mod mutate;
mod select;
mod split;
mod transform;
mod traverse;

pub use access::*;
pub use mutate::*;
pub use select::*;
pub use split::*;
pub use transform::*;
pub use traverse::*;
