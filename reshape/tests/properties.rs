use {
    quickcheck::{QuickCheck, TestResult},
    reshape::prelude::*,
};

type Mixed = (u8, String, bool, i64, char, Vec<u16>);

fn push_pop_inverse_property(record: Mixed, value: Option<u32>) -> bool {
    record.clone().push_back(value).pop_back() == record
        && record.clone().push_front(value).pop_front() == record
}

fn reverse_property(record: Mixed) -> bool {
    record.clone().reverse().front() == record.back() && record.clone().reverse().reverse() == record
}

fn rotation_property(record: Mixed) -> bool {
    record.clone().rotate_left().rotate_right() == record
        && record.clone().rotate_right().rotate_left() == record
        && record.clone().rotate_left() == record.reorder::<Indices![1, 2, 3, 4, 5, 0]>()
}

fn split_append_property(record: Mixed) -> bool {
    let (front, back) = record.clone().split::<2>();
    let (empty, all) = record.clone().split::<0>();
    front.append(back) == record && empty.append(all) == record
}

fn chunk_flatten_property(record: Mixed) -> bool {
    record.clone().chunk::<2>().flatten() == record
        && record.clone().chunk::<3>().flatten() == record
}

fn alternating_split_property(left: (u8, String, bool), right: (char, i32, Vec<u8>)) -> bool {
    left.clone().interleave(right.clone()).alternating_split() == (left, right)
}

fn elem_swap_property(record: Mixed) -> bool {
    let swapped = record.clone().elem_swap::<1, 4>();
    swapped == record.reorder::<Indices![0, 4, 2, 3, 1, 5]>()
        && swapped.elem_swap::<4, 1>() == record
}

fn permute_matches_reorder_property(record: Mixed) -> bool {
    record.reorder::<Indices![5, 3, 1, 0]>() == record.permute::<Indices![5, 3, 1, 0]>()
}

fn insert_erase_property(record: Mixed, value: u64) -> TestResult {
    let inserted = record.clone().insert::<3, _>(value);
    if *inserted.get::<3>() != value {
        return TestResult::error("inserted value is not at the insertion index");
    }
    TestResult::from_bool(inserted.erase::<3>() == record)
}

fn replace_property(record: Mixed, value: bool) -> bool {
    let replaced = record.clone().replace::<0, _>(value);
    *replaced.front() == value && replaced.replace::<0, _>(record.0) == record
}

fn convert_round_trip_property(record: (u8, i16, u32)) -> bool {
    let wide: (u64, i64, u64) = record.convert();
    wide.try_convert::<(u8, i16, u32)>().ok() == Some(record)
}

fn borrowed_resolve_property(record: Mixed) -> bool {
    record.borrowed().resolve_refs() == record
}

fn count_if_property(record: (i8, i16, i32, i64)) -> bool {
    let mut positive = overload!(
        |n: &i8| *n > 0,
        |n: &i16| *n > 0,
        |n: &i32| *n > 0,
        |n: &i64| *n > 0,
    );
    let by_hand = [
        i64::from(record.0),
        i64::from(record.1),
        i64::from(record.2),
        record.3,
    ]
    .iter()
    .filter(|n| **n > 0)
    .count();
    record.count_if(&mut positive) == by_hand
        && record.all_of(&mut positive) == (by_hand == 4)
        && record.any_of(&mut positive) == (by_hand > 0)
}

#[test]
fn push_pop_inverse() {
    QuickCheck::new().quickcheck(push_pop_inverse_property as fn(_, _) -> bool)
}

#[test]
fn reverse() {
    QuickCheck::new().quickcheck(reverse_property as fn(_) -> bool)
}

#[test]
fn rotation() {
    QuickCheck::new().quickcheck(rotation_property as fn(_) -> bool)
}

#[test]
fn split_append() {
    QuickCheck::new().quickcheck(split_append_property as fn(_) -> bool)
}

#[test]
fn chunk_flatten() {
    QuickCheck::new().quickcheck(chunk_flatten_property as fn(_) -> bool)
}

#[test]
fn alternating_split() {
    QuickCheck::new().quickcheck(alternating_split_property as fn(_, _) -> bool)
}

#[test]
fn elem_swap() {
    QuickCheck::new().quickcheck(elem_swap_property as fn(_) -> bool)
}

#[test]
fn permute_matches_reorder() {
    QuickCheck::new().quickcheck(permute_matches_reorder_property as fn(_) -> bool)
}

#[test]
fn insert_erase() {
    QuickCheck::new().quickcheck(insert_erase_property as fn(_, _) -> TestResult)
}

#[test]
fn replace() {
    QuickCheck::new().quickcheck(replace_property as fn(_, _) -> bool)
}

#[test]
fn convert_round_trip() {
    QuickCheck::new().quickcheck(convert_round_trip_property as fn(_) -> bool)
}

#[test]
fn borrowed_resolve() {
    QuickCheck::new().quickcheck(borrowed_resolve_property as fn(_) -> bool)
}

#[test]
fn count_if() {
    QuickCheck::new().quickcheck(count_if_property as fn(_) -> bool)
}
