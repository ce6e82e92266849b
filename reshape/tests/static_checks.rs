use reshape::list::*;
use reshape::tuple::{ListOf, Tuple, TupleOf};
use reshape::unary::UnaryOf;
use reshape::{Indices, Record};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

type Three = ListOf<(u8, u16, u32)>;
type Four = ListOf<(u8, u16, u32, u64)>;

assert_type_eq_all!(Three, (u8, (u16, (u32, ()))));
assert_type_eq_all!(TupleOf<Three>, (u8, u16, u32));
assert_type_eq_all!(ListOf<()>, ());

assert_type_eq_all!(TupleOf<<Three as RotateLeft>::Output>, (u16, u32, u8));
assert_type_eq_all!(TupleOf<<Three as RotateRight>::Output>, (u32, u8, u16));
assert_type_eq_all!(TupleOf<<Three as ReverseOnto<()>>::Output>, (u32, u16, u8));
assert_type_eq_all!(<() as RotateLeft>::Output, ());

assert_type_eq_all!(
    TupleOf<<Three as Insert<UnaryOf<1>, bool>>::Output>,
    (u8, bool, u16, u32),
);
assert_type_eq_all!(
    TupleOf<<Three as Insert<UnaryOf<3>, bool>>::Output>,
    (u8, u16, u32, bool),
);
assert_type_eq_all!(<Three as Remove<UnaryOf<0>>>::Removed, u8);
assert_type_eq_all!(TupleOf<<Three as Remove<UnaryOf<0>>>::Output>, (u16, u32));
assert_type_eq_all!(<Three as Replace<UnaryOf<2>, char>>::Replaced, u32);
assert_type_eq_all!(TupleOf<<Three as Replace<UnaryOf<2>, char>>::Output>, (u8, u16, char));

assert_type_eq_all!(TupleOf<<Four as SplitAt<UnaryOf<1>>>::Front>, (u8,));
assert_type_eq_all!(TupleOf<<Four as SplitAt<UnaryOf<1>>>::Back>, (u16, u32, u64));
assert_type_eq_all!(TupleOf<<Four as SplitAt<UnaryOf<4>>>::Back>, ());
assert_type_eq_all!(
    TupleOf<<Four as Chunks<UnaryOf<2>>>::Output>,
    ((u8, u16), (u32, u64)),
);
assert_type_eq_all!(TupleOf<<Four as AlternatingSplit>::Evens>, (u8, u32));
assert_type_eq_all!(TupleOf<<Four as AlternatingSplit>::Odds>, (u16, u64));
assert_type_eq_all!(
    TupleOf<<ListOf<((u8,), (), (u16, u32))> as Flatten>::Output>,
    (u8, u16, u32),
);
assert_type_eq_all!(
    TupleOf<<ListOf<(u8, u16)> as Interleave<ListOf<(char, bool)>>>::Output>,
    (u8, char, u16, bool),
);

assert_type_eq_all!(TupleOf<<Four as Permute<Indices![3, 1]>>::Output>, (u64, u16));
assert_type_eq_all!(
    TupleOf<<Four as ElemSwap<UnaryOf<0>, UnaryOf<3>>>::Output>,
    (u64, u16, u32, u8),
);
assert_type_eq_all!(TupleOf<<Four as ElemSwap<UnaryOf<2>, UnaryOf<2>>>::Output>, (u8, u16, u32, u64));
assert_type_eq_all!(
    TupleOf<<ListOf<(&'static u8, &'static mut u16, u32)> as ResolveEach>::Output>,
    (u8, u16, u32),
);

assert_type_eq_all!(<&'static String as Resolve>::Resolved, String);
assert_type_eq_all!(<&'static mut Vec<u8> as Resolve>::Resolved, Vec<u8>);
assert_type_eq_all!(<Vec<&'static str> as Resolve>::Resolved, Vec<&'static str>);
assert_type_eq_all!(<(&'static u8, u16) as Resolve>::Resolved, (&'static u8, u16));

assert_impl_all!(Three: Get<UnaryOf<0>>, Get<UnaryOf<2>>, Interleave<ListOf<(i8, i16, i32)>>);
assert_impl_all!((): Tuple, AlternatingSplit, Chunks<UnaryOf<3>>, Flatten);
assert_impl_all!((u8, String, Vec<u8>): Record);

// Out-of-range positions
assert_not_impl_any!(Three: Get<UnaryOf<3>>, Remove<UnaryOf<3>>, Insert<UnaryOf<4>, bool>);
assert_not_impl_any!(Three: SplitAt<UnaryOf<4>>, ElemSwap<UnaryOf<0>, UnaryOf<3>>);
assert_not_impl_any!((): SplitFirst, SplitLast, Get<UnaryOf<0>>);

// Arity requirements
assert_not_impl_any!(Three: AlternatingSplit, Chunks<UnaryOf<2>>, Chunks<UnaryOf<0>>);
assert_not_impl_any!(Three: Interleave<ListOf<(i8, i16)>>, Interleave<Four>);
assert_not_impl_any!(ListOf<(u8, (u16, u32), bool)>: Flatten);

// Selecting by reference still bounds-checks every index
assert_impl_all!(Indices![2, 0, 2]: Pick<<(u8, u16, u32) as Tuple>::Refs<'static>>);
assert_not_impl_any!(Indices![3]: Pick<<(u8, u16, u32) as Tuple>::Refs<'static>>);
assert_not_impl_any!(Indices![0, 1, 5]: Pick<<(u8, u16, u32) as Tuple>::Refs<'static>>);

// Each slot moves at most once
assert_not_impl_any!(Three: Permute<Indices![0, 0]>, Permute<Indices![2, 1, 2]>);
