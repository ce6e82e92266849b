/*!
![license: MIT](https://img.shields.io/badge/license-MIT-blue)

> **reshape (verb):** To give a new form to; to reorganize.
>
> **reshape (crate):** Compile-time structural transformations for heterogeneous tuples.

A tuple `(A, B, C)` is a fixed-arity record whose slots each have their own type. This crate
lets you rearrange such records the way you would rearrange a `Vec`: push and pop, insert and
erase, swap, reorder, rotate, split, chunk, interleave, and map over every slot. Unlike with a
`Vec`, the *type* of the result is computed too, and every positional argument is checked by the
compiler:

- indices are const generics, so an out-of-range index is a type error, not a panic;
- arity requirements (an even number of slots to split alternately, a chunk size which divides
  the arity, equal arities to interleave) are trait bounds which fail to hold when violated;
- every operation builds its result in one expression by moving (or, for
  [`reorder`](Record::reorder), cloning) the slots it selects, with no allocation and no runtime
  bookkeeping.

Slots may hold owned values, shared references, or unique references. Reference-ness is part of
a slot's type and survives every operation that moves the slot; [`resolve_refs`] is the one
operation which turns references into owned clones.

## Quick reference

Bring the [`Record`] extension trait into scope with `use reshape::prelude::*;` and every tuple of
up to 64 slots gains these methods:

| Category | Methods |
| :------- | :------ |
| Access | [`front`](Record::front), [`back`](Record::back), [`get::<K>`](Record::get), and their `_mut` forms |
| Growing and shrinking | [`push_back`](Record::push_back), [`push_front`](Record::push_front), [`push_back_as`](Record::push_back_as), [`push_front_as`](Record::push_front_as), [`append`](Record::append), [`prepend`](Record::prepend), [`pop_back`](Record::pop_back), [`pop_front`](Record::pop_front), [`insert::<K, _>`](Record::insert), [`erase::<K>`](Record::erase), [`replace::<K, _>`](Record::replace) |
| Rearranging | [`elem_swap::<I, J>`](Record::elem_swap), [`reorder::<Indices![..]>`](Record::reorder), [`permute::<Indices![..]>`](Record::permute), [`rotate_left`](Record::rotate_left), [`rotate_right`](Record::rotate_right), [`reverse`](Record::reverse) |
| Splitting and joining | [`split::<K>`](Record::split), [`chunk::<K>`](Record::chunk), [`flatten`](Record::flatten), [`interleave`](Record::interleave), [`alternating_split`](Record::alternating_split) |
| Changing slot types | [`type_transform`](Record::type_transform), [`borrowed`](Record::borrowed), [`borrowed_mut`](Record::borrowed_mut), [`resolve_refs`], [`convert`](Record::convert), [`try_convert`](Record::try_convert) |
| Visiting | [`for_each`](Record::for_each), [`for_each_mut`](Record::for_each_mut), [`all_of`](Record::all_of), [`any_of`](Record::any_of), [`count_if`](Record::count_if) |

Visitors, predicates, and mappers implement [`Call`] for each slot type they accept. The
[`overload!`] macro builds one out of several closures:

```
use reshape::prelude::*;

let record = (42, 'c', false);
let is_set = overload!(|n: &i32| *n != 0, |c: &char| *c != '\0', |b: &bool| *b);
assert_eq!(record.count_if(is_set), 2);

let (evens, odds) = (1, 'J', true, 3.14, 'c', 42).alternating_split();
assert_eq!(evens, (1, true, 'c'));
assert_eq!(odds, ('J', 3.14, 42));
```

Under the hood, tuples are converted into inductive lists (see [`tuple`]) and operated on by the
traits in [`list`], driven by the type-level numbers in [`unary`] and the index sequences in
[`index`]. Most programs never need to name those modules.

[`resolve_refs`]: Record::resolve_refs
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod call;
pub mod index;
pub mod list;
pub mod tuple;
pub mod unary;

mod error;
mod record;

pub use call::{Call, Converted, Resolved};
pub use error::ConvertError;
pub use list::Resolve;
pub use record::Record;
pub use reshape_macro::{overload, Resolve};

/// The prelude module for quickly getting started with reshape.
///
/// This module is designed to be imported as `use reshape::prelude::*;`, which brings into scope
/// the [`Record`] methods along with everything needed to write visitors and index sequences.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{overload, Call, Converted, Indices, Record, Resolve, Resolved};
}

#[cfg(test)]
mod laws {
    include!(concat!(env!("OUT_DIR"), "/laws.rs"));
}
