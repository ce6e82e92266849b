use std::cell::Cell;

use reshape::prelude::*;

#[derive(Debug, PartialEq, Resolve)]
struct Token(u32);

#[derive(Debug, PartialEq, Resolve)]
struct Tagged<'a, T> {
    tag: &'a str,
    value: T,
}

/// Counts how many times it has been cloned.
#[derive(Debug, Resolve)]
struct Counted<'c> {
    clones: &'c Cell<usize>,
}

impl Clone for Counted<'_> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Counted {
            clones: self.clones,
        }
    }
}

#[test]
fn derived_types_move_through_resolution() {
    let tagged = Tagged {
        tag: "x",
        value: vec![1, 2],
    };
    let resolved = (Token(1), tagged).resolve_refs();
    assert_eq!(
        resolved,
        (
            Token(1),
            Tagged {
                tag: "x",
                value: vec![1, 2]
            }
        )
    );
}

#[test]
fn owned_slots_are_never_cloned() {
    let clones = Cell::new(0);
    let owned = Counted { clones: &clones };
    let by_ref = Counted { clones: &clones };
    let _ = (owned, &by_ref, &by_ref).resolve_refs();
    assert_eq!(clones.get(), 2);
}
