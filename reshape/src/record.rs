use crate::{
    error::ConvertError,
    list::*,
    tuple::{List, Tuple, TupleOf},
    unary::{Number, ToUnary, UnaryOf},
};

/// Structural operations on heterogeneous records, available on every tuple of up to 64 slots.
///
/// A record is an ordinary tuple. Its slots may hold owned values, shared references, or unique
/// references; every operation preserves the type of each slot it moves, so a reference stays a
/// reference. Positional arguments are const generics checked at compile time, and operations
/// never mutate their source: they consume it (or borrow it, for accessors and visitors) and
/// produce a new tuple.
///
/// ```
/// use reshape::Record;
///
/// let record = (1_u8, "two", 3.0_f64);
/// assert_eq!(*record.get::<1>(), "two");
///
/// let record = record.push_back('4').erase::<0>().rotate_left();
/// assert_eq!(record, (3.0, '4', "two"));
/// ```
///
/// Out-of-range positions are rejected by the compiler rather than at runtime:
///
/// ```compile_fail
/// use reshape::Record;
///
/// let out_of_range = (1_u8, 2_u8).get::<2>();
/// ```
pub trait Record: Tuple {
    /// Borrow the first slot.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!(*(1, 'b').front(), 1);
    /// ```
    ///
    /// The empty record has no first slot:
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let nothing = ().front();
    /// ```
    fn front<'a>(&'a self) -> <Self::Refs<'a> as SplitFirst>::First
    where
        Self: 'a,
        Self::Refs<'a>: SplitFirst,
    {
        <Self::Refs<'a> as SplitFirst>::split_first(self.as_refs()).0
    }

    /// Mutably borrow the first slot.
    fn front_mut<'a>(&'a mut self) -> <Self::Muts<'a> as SplitFirst>::First
    where
        Self: 'a,
        Self::Muts<'a>: SplitFirst,
    {
        <Self::Muts<'a> as SplitFirst>::split_first(self.as_muts()).0
    }

    /// Borrow the last slot.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!(*(1, 'b').back(), 'b');
    /// ```
    fn back<'a>(&'a self) -> <Self::Refs<'a> as SplitLast>::Last
    where
        Self: 'a,
        Self::Refs<'a>: SplitLast,
    {
        <Self::Refs<'a> as SplitLast>::split_last(self.as_refs()).1
    }

    /// Mutably borrow the last slot.
    fn back_mut<'a>(&'a mut self) -> <Self::Muts<'a> as SplitLast>::Last
    where
        Self: 'a,
        Self::Muts<'a>: SplitLast,
    {
        <Self::Muts<'a> as SplitLast>::split_last(self.as_muts()).1
    }

    /// Borrow slot `K`.
    ///
    /// A slot holding a unique reference is only reachable as a shared reference to that unique
    /// reference, so it cannot be written through:
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let mut n = 1;
    /// let record = (&mut n, 'x');
    /// **record.get::<0>() += 1;
    /// ```
    fn get<'a, const K: usize>(&'a self) -> <Self::Refs<'a> as Get<UnaryOf<K>>>::Item
    where
        Self: 'a,
        Number<K>: ToUnary,
        Self::Refs<'a>: Get<UnaryOf<K>>,
    {
        <Self::Refs<'a> as Get<UnaryOf<K>>>::into_item(self.as_refs())
    }

    /// Mutably borrow slot `K`.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let mut record = (1, String::from("a"));
    /// record.get_mut::<1>().push('b');
    /// assert_eq!(record.1, "ab");
    /// ```
    fn get_mut<'a, const K: usize>(&'a mut self) -> <Self::Muts<'a> as Get<UnaryOf<K>>>::Item
    where
        Self: 'a,
        Number<K>: ToUnary,
        Self::Muts<'a>: Get<UnaryOf<K>>,
    {
        <Self::Muts<'a> as Get<UnaryOf<K>>>::into_item(self.as_muts())
    }

    /// Add a slot to the end, whose type is exactly the type of `value`.
    fn push_back<V>(self, value: V) -> TupleOf<<Self::AsList as PushBack<V>>::Output>
    where
        Self::AsList: PushBack<V>,
        <Self::AsList as PushBack<V>>::Output: List,
    {
        <Self::AsList as PushBack<V>>::push_back(self.into_list(), value).into_tuple()
    }

    /// Add a slot of type `T` to the end, converting `value` into it.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let record: (u8, u64) = (1_u8,).push_back_as::<u64>(2_u32);
    /// assert_eq!(record, (1, 2));
    /// ```
    fn push_back_as<T>(self, value: impl Into<T>) -> TupleOf<<Self::AsList as PushBack<T>>::Output>
    where
        Self::AsList: PushBack<T>,
        <Self::AsList as PushBack<T>>::Output: List,
    {
        self.push_back::<T>(value.into())
    }

    /// Add a slot to the front, whose type is exactly the type of `value`.
    fn push_front<V>(self, value: V) -> TupleOf<(V, Self::AsList)>
    where
        (V, Self::AsList): List,
    {
        (value, self.into_list()).into_tuple()
    }

    /// Add a slot of type `T` to the front, converting `value` into it.
    fn push_front_as<T>(self, value: impl Into<T>) -> TupleOf<(T, Self::AsList)>
    where
        (T, Self::AsList): List,
    {
        self.push_front::<T>(value.into())
    }

    /// Add every slot of `other` to the end, in order.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 2).append(('c', "d")), (1, 2, 'c', "d"));
    /// ```
    fn append<R: Tuple>(self, other: R) -> TupleOf<<Self::AsList as Concat<R::AsList>>::Output>
    where
        Self::AsList: Concat<R::AsList>,
        <Self::AsList as Concat<R::AsList>>::Output: List,
    {
        <Self::AsList as Concat<R::AsList>>::concat(self.into_list(), other.into_list())
            .into_tuple()
    }

    /// Add every slot of `other` to the front, in order.
    fn prepend<R: Tuple>(self, other: R) -> TupleOf<<R::AsList as Concat<Self::AsList>>::Output>
    where
        R::AsList: Concat<Self::AsList>,
        <R::AsList as Concat<Self::AsList>>::Output: List,
    {
        <R::AsList as Concat<Self::AsList>>::concat(other.into_list(), self.into_list())
            .into_tuple()
    }

    /// Drop the last slot.
    fn pop_back(self) -> TupleOf<<Self::AsList as SplitLast>::Init>
    where
        Self::AsList: SplitLast,
        <Self::AsList as SplitLast>::Init: List,
    {
        <Self::AsList as SplitLast>::split_last(self.into_list())
            .0
            .into_tuple()
    }

    /// Drop the first slot.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 2, 3).pop_front(), (2, 3));
    /// assert_eq!((1,).pop_front(), ());
    /// ```
    fn pop_front(self) -> TupleOf<<Self::AsList as SplitFirst>::Rest>
    where
        Self::AsList: SplitFirst,
        <Self::AsList as SplitFirst>::Rest: List,
    {
        <Self::AsList as SplitFirst>::split_first(self.into_list())
            .1
            .into_tuple()
    }

    /// Insert `value` so that it becomes slot `K`. `K` may be anything from `0` up to and
    /// including the number of slots.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 3).insert::<1, _>(2), (1, 2, 3));
    /// assert_eq!((1, 2).insert::<2, _>(3), (1, 2, 3));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let too_far = (1, 2).insert::<3, _>(3);
    /// ```
    fn insert<const K: usize, V>(
        self,
        value: V,
    ) -> TupleOf<<Self::AsList as Insert<UnaryOf<K>, V>>::Output>
    where
        Number<K>: ToUnary,
        Self::AsList: Insert<UnaryOf<K>, V>,
        <Self::AsList as Insert<UnaryOf<K>, V>>::Output: List,
    {
        <Self::AsList as Insert<UnaryOf<K>, V>>::insert(self.into_list(), value).into_tuple()
    }

    /// Remove slot `K`.
    fn erase<const K: usize>(self) -> TupleOf<<Self::AsList as Remove<UnaryOf<K>>>::Output>
    where
        Number<K>: ToUnary,
        Self::AsList: Remove<UnaryOf<K>>,
        <Self::AsList as Remove<UnaryOf<K>>>::Output: List,
    {
        <Self::AsList as Remove<UnaryOf<K>>>::remove(self.into_list())
            .1
            .into_tuple()
    }

    /// Replace slot `K` with `value`; the slot takes on the type of `value`.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 2, 3).replace::<1, _>("two"), (1, "two", 3));
    /// ```
    fn replace<const K: usize, V>(
        self,
        value: V,
    ) -> TupleOf<<Self::AsList as Replace<UnaryOf<K>, V>>::Output>
    where
        Number<K>: ToUnary,
        Self::AsList: Replace<UnaryOf<K>, V>,
        <Self::AsList as Replace<UnaryOf<K>, V>>::Output: List,
    {
        <Self::AsList as Replace<UnaryOf<K>, V>>::replace(self.into_list(), value)
            .1
            .into_tuple()
    }

    /// Replace slot `K` with a slot of type `T`, converting `value` into it.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let record: (u8, u64) = (1_u8, 'x').replace_as::<1, u64>(2_u32);
    /// assert_eq!(record, (1, 2));
    /// ```
    fn replace_as<const K: usize, T>(
        self,
        value: impl Into<T>,
    ) -> TupleOf<<Self::AsList as Replace<UnaryOf<K>, T>>::Output>
    where
        Number<K>: ToUnary,
        Self::AsList: Replace<UnaryOf<K>, T>,
        <Self::AsList as Replace<UnaryOf<K>, T>>::Output: List,
    {
        self.replace::<K, T>(value.into())
    }

    /// Exchange slots `I` and `J`. Swapping a slot with itself changes nothing.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 'b', "c").elem_swap::<0, 2>(), ("c", 'b', 1));
    /// assert_eq!((1, 'b', "c").elem_swap::<1, 1>(), (1, 'b', "c"));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let out_of_range = (1, 'b', "c").elem_swap::<0, 3>();
    /// ```
    fn elem_swap<const I: usize, const J: usize>(
        self,
    ) -> TupleOf<<Self::AsList as ElemSwap<UnaryOf<I>, UnaryOf<J>>>::Output>
    where
        Number<I>: ToUnary,
        Number<J>: ToUnary,
        Self::AsList: ElemSwap<UnaryOf<I>, UnaryOf<J>>,
        <Self::AsList as ElemSwap<UnaryOf<I>, UnaryOf<J>>>::Output: List,
    {
        <Self::AsList as ElemSwap<UnaryOf<I>, UnaryOf<J>>>::elem_swap(self.into_list())
            .into_tuple()
    }

    /// Build a new record from clones of the slots named by the index sequence `Ix`, in that
    /// order. Indices may repeat or be left out; the new record has one slot per index.
    ///
    /// Cloning a reference slot copies the reference, so repeated reference slots alias the same
    /// referent.
    ///
    /// ```
    /// use reshape::{Indices, Record};
    ///
    /// let record = (0, 'a', "b", 3.0, 4_u8);
    /// assert_eq!(record.reorder::<Indices![4, 0, 0]>(), (4, 0, 0));
    /// ```
    ///
    /// Every index must name a slot:
    ///
    /// ```compile_fail
    /// use reshape::{Indices, Record};
    ///
    /// let out_of_range = (0, 'a').reorder::<Indices![1, 2]>();
    /// ```
    fn reorder<'a, Ix>(&'a self) -> TupleOf<<<Ix as Pick<Self::Refs<'a>>>::Output as ClonedEach>::Output>
    where
        Self: 'a,
        Ix: Pick<Self::Refs<'a>>,
        <Ix as Pick<Self::Refs<'a>>>::Output: ClonedEach,
        <<Ix as Pick<Self::Refs<'a>>>::Output as ClonedEach>::Output: List,
    {
        <Ix as Pick<Self::Refs<'a>>>::pick(self.as_refs())
            .cloned_each()
            .into_tuple()
    }

    /// Move the slots named by the index sequence `Ix` into a new record, in that order. Each
    /// index may appear at most once; slots which are not named are dropped.
    ///
    /// Unlike [`reorder`](Record::reorder), nothing is cloned, so records holding unique
    /// references or non-`Clone` values can be permuted.
    ///
    /// ```
    /// use reshape::{Indices, Record};
    ///
    /// let (mut a, mut b) = (1, 2);
    /// let (b_ref, a_ref) = (&mut a, &mut b).permute::<Indices![1, 0]>();
    /// *a_ref += 10;
    /// *b_ref += 20;
    /// assert_eq!((a, b), (11, 22));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::{Indices, Record};
    ///
    /// let twice = (String::new(), 1).permute::<Indices![0, 0]>();
    /// ```
    fn permute<Ix>(self) -> TupleOf<<Self::AsList as Permute<Ix>>::Output>
    where
        Self::AsList: Permute<Ix>,
        <Self::AsList as Permute<Ix>>::Output: List,
    {
        <Self::AsList as Permute<Ix>>::permute(self.into_list()).into_tuple()
    }

    /// Move the first slot to the end. The empty record is unchanged.
    fn rotate_left(self) -> TupleOf<<Self::AsList as RotateLeft>::Output>
    where
        Self::AsList: RotateLeft,
        <Self::AsList as RotateLeft>::Output: List,
    {
        <Self::AsList as RotateLeft>::rotate_left(self.into_list()).into_tuple()
    }

    /// Move the last slot to the front. The empty record is unchanged.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 'b', "c").rotate_right(), ("c", 1, 'b'));
    /// assert_eq!(().rotate_right(), ());
    /// ```
    fn rotate_right(self) -> TupleOf<<Self::AsList as RotateRight>::Output>
    where
        Self::AsList: RotateRight,
        <Self::AsList as RotateRight>::Output: List,
    {
        <Self::AsList as RotateRight>::rotate_right(self.into_list()).into_tuple()
    }

    /// Reverse the order of the slots.
    fn reverse(self) -> TupleOf<<Self::AsList as ReverseOnto<()>>::Output>
    where
        Self::AsList: ReverseOnto<()>,
        <Self::AsList as ReverseOnto<()>>::Output: List,
    {
        <Self::AsList as ReverseOnto<()>>::reverse_onto(self.into_list(), ()).into_tuple()
    }

    /// Split into the first `K` slots and the rest. `K` may be anything from `0` up to and
    /// including the number of slots.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 'b', "c").split::<1>(), ((1,), ('b', "c")));
    /// assert_eq!((1, 'b', "c").split::<3>(), ((1, 'b', "c"), ()));
    /// ```
    fn split<const K: usize>(
        self,
    ) -> (
        TupleOf<<Self::AsList as SplitAt<UnaryOf<K>>>::Front>,
        TupleOf<<Self::AsList as SplitAt<UnaryOf<K>>>::Back>,
    )
    where
        Number<K>: ToUnary,
        Self::AsList: SplitAt<UnaryOf<K>>,
        <Self::AsList as SplitAt<UnaryOf<K>>>::Front: List,
        <Self::AsList as SplitAt<UnaryOf<K>>>::Back: List,
    {
        let (front, back) = <Self::AsList as SplitAt<UnaryOf<K>>>::split_at(self.into_list());
        (front.into_tuple(), back.into_tuple())
    }

    /// Group consecutive slots into a record of `N / K` records of `K` slots each. `K` must be
    /// non-zero and divide the number of slots `N`.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 'a', 2, 'b').chunk::<2>(), ((1, 'a'), (2, 'b')));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let uneven = (1, 'a', 2).chunk::<2>();
    /// ```
    fn chunk<const K: usize>(self) -> TupleOf<<Self::AsList as Chunks<UnaryOf<K>>>::Output>
    where
        Number<K>: ToUnary,
        Self::AsList: Chunks<UnaryOf<K>>,
        <Self::AsList as Chunks<UnaryOf<K>>>::Output: List,
    {
        <Self::AsList as Chunks<UnaryOf<K>>>::chunks(self.into_list()).into_tuple()
    }

    /// Concatenate a record of records into a single record; the inverse of
    /// [`chunk`](Record::chunk).
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!(((1, 'a'), (), (2,)).flatten(), (1, 'a', 2));
    /// ```
    fn flatten(self) -> TupleOf<<Self::AsList as Flatten>::Output>
    where
        Self::AsList: Flatten,
        <Self::AsList as Flatten>::Output: List,
    {
        <Self::AsList as Flatten>::flatten(self.into_list()).into_tuple()
    }

    /// Interleave the slots of this record with those of another of the same arity, starting
    /// with this one.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// assert_eq!((1, 2).interleave(('a', 'b')), (1, 'a', 2, 'b'));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let mismatched = (1, 2).interleave(('a',));
    /// ```
    fn interleave<R: Tuple>(self, other: R) -> TupleOf<<Self::AsList as Interleave<R::AsList>>::Output>
    where
        Self::AsList: Interleave<R::AsList>,
        <Self::AsList as Interleave<R::AsList>>::Output: List,
    {
        <Self::AsList as Interleave<R::AsList>>::interleave(self.into_list(), other.into_list())
            .into_tuple()
    }

    /// Separate the slots at even indices from the slots at odd indices. The number of slots must
    /// be even.
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let odd = (1, 2, 3).alternating_split();
    /// ```
    fn alternating_split(
        self,
    ) -> (
        TupleOf<<Self::AsList as AlternatingSplit>::Evens>,
        TupleOf<<Self::AsList as AlternatingSplit>::Odds>,
    )
    where
        Self::AsList: AlternatingSplit,
        <Self::AsList as AlternatingSplit>::Evens: List,
        <Self::AsList as AlternatingSplit>::Odds: List,
    {
        let (evens, odds) = <Self::AsList as AlternatingSplit>::alternating_split(self.into_list());
        (evens.into_tuple(), odds.into_tuple())
    }

    /// Apply `f` to every slot by value, front to back. Each slot of the result has the output
    /// type of `f` for the corresponding input slot type.
    ///
    /// ```
    /// use reshape::{overload, Record};
    ///
    /// let record = (2_u8, "text", 'c');
    /// let mapped = record.type_transform(overload!(
    ///     |n: u8| u32::from(n) * 1000,
    ///     |s: &'static str| s.len(),
    ///     |c: char| c.is_alphabetic(),
    /// ));
    /// assert_eq!(mapped, (2000_u32, 4_usize, true));
    /// ```
    fn type_transform<F>(self, f: F) -> TupleOf<<Self::AsList as Map<F>>::Output>
    where
        Self::AsList: Map<F>,
        <Self::AsList as Map<F>>::Output: List,
    {
        let mut f = f;
        <Self::AsList as Map<F>>::map_each(self.into_list(), &mut f).into_tuple()
    }

    /// A record of shared references to each slot.
    fn borrowed<'a>(&'a self) -> TupleOf<Self::Refs<'a>>
    where
        Self: 'a,
    {
        self.as_refs().into_tuple()
    }

    /// A record of unique references to each slot.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let mut record = (1, String::from("a"));
    /// let (number, text) = record.borrowed_mut();
    /// *number += 1;
    /// text.push('b');
    /// assert_eq!(record, (2, String::from("ab")));
    /// ```
    fn borrowed_mut<'a>(&'a mut self) -> TupleOf<Self::Muts<'a>>
    where
        Self: 'a,
    {
        self.as_muts().into_tuple()
    }

    /// Replace every reference slot with an owned clone of its referent, cloning exactly once per
    /// reference slot. Owned slots move through without being cloned.
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let name = String::from("shared");
    /// let mut count = 7_u32;
    /// let owned: (String, u32, char) = (&name, &mut count, 'z').resolve_refs();
    /// assert_eq!(owned, (String::from("shared"), 7, 'z'));
    /// ```
    fn resolve_refs(self) -> TupleOf<<Self::AsList as ResolveEach>::Output>
    where
        Self::AsList: ResolveEach,
        <Self::AsList as ResolveEach>::Output: List,
    {
        <Self::AsList as ResolveEach>::resolve_each(self.into_list()).into_tuple()
    }

    /// Convert every slot into the slot type at the same index of `T`, by [`Into`].
    ///
    /// ```
    /// use reshape::Record;
    ///
    /// let wide: (u64, f64, String) = (1_u8, 2.5_f32, "s").convert();
    /// assert_eq!(wide, (1, 2.5, String::from("s")));
    /// ```
    ///
    /// ```compile_fail
    /// use reshape::Record;
    ///
    /// let wrong_arity: (u64,) = (1_u8, 2_u8).convert();
    /// ```
    fn convert<T: Tuple>(self) -> T
    where
        Self::AsList: ConvertEach<T::AsList>,
    {
        <Self::AsList as ConvertEach<T::AsList>>::convert_each(self.into_list()).into_tuple()
    }

    /// Convert every slot into the slot type at the same index of `T`, by [`TryInto`], stopping at
    /// the first slot which fails to convert.
    fn try_convert<T: Tuple>(self) -> Result<T, ConvertError>
    where
        Self::AsList: TryConvertEach<T::AsList>,
    {
        <Self::AsList as TryConvertEach<T::AsList>>::try_convert_each(self.into_list(), 0)
            .map(List::into_tuple)
    }

    /// Call `visitor` with a shared reference to every slot, front to back.
    fn for_each<'a, F>(&'a self, visitor: F)
    where
        Self: 'a,
        Self::Refs<'a>: ForEach<F>,
    {
        let mut visitor = visitor;
        <Self::Refs<'a> as ForEach<F>>::for_each_slot(self.as_refs(), &mut visitor)
    }

    /// Call `visitor` with a unique reference to every slot, front to back.
    ///
    /// ```
    /// use reshape::{overload, Record};
    ///
    /// let mut record = (1_u8, String::from("a"), 2_u8);
    /// record.for_each_mut(overload!(|n: &mut u8| *n *= 10, |s: &mut String| s.push('!')));
    /// assert_eq!(record, (10, String::from("a!"), 20));
    /// ```
    fn for_each_mut<'a, F>(&'a mut self, visitor: F)
    where
        Self: 'a,
        Self::Muts<'a>: ForEach<F>,
    {
        let mut visitor = visitor;
        <Self::Muts<'a> as ForEach<F>>::for_each_slot(self.as_muts(), &mut visitor)
    }

    /// Whether `pred` holds for every slot, stopping at the first slot for which it does not.
    /// Vacuously true of the empty record.
    fn all_of<'a, F>(&'a self, pred: F) -> bool
    where
        Self: 'a,
        Self::Refs<'a>: AllOf<F>,
    {
        let mut pred = pred;
        <Self::Refs<'a> as AllOf<F>>::all_of(self.as_refs(), &mut pred)
    }

    /// Whether `pred` holds for any slot, stopping at the first slot for which it does. Never
    /// true of the empty record.
    fn any_of<'a, F>(&'a self, pred: F) -> bool
    where
        Self: 'a,
        Self::Refs<'a>: AnyOf<F>,
    {
        let mut pred = pred;
        <Self::Refs<'a> as AnyOf<F>>::any_of(self.as_refs(), &mut pred)
    }

    /// The number of slots for which `pred` holds. Every slot is visited.
    ///
    /// ```
    /// use reshape::{overload, Record};
    ///
    /// let record = (42, 'c', false);
    /// let truthy = overload!(|n: &i32| *n != 0, |c: &char| *c != '\0', |b: &bool| *b);
    /// assert_eq!(record.count_if(truthy), 2);
    /// ```
    fn count_if<'a, F>(&'a self, pred: F) -> usize
    where
        Self: 'a,
        Self::Refs<'a>: CountIf<F>,
    {
        let mut pred = pred;
        <Self::Refs<'a> as CountIf<F>>::count_if(self.as_refs(), &mut pred)
    }
}

impl<T: Tuple> Record for T {}
