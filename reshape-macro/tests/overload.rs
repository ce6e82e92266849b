use std::cell::RefCell;

use reshape::prelude::*;
use static_assertions::assert_impl_all;

#[test]
fn each_arm_handles_its_own_type() {
    let mut describe = overload!(
        |n: &i32| format!("i32 {}", n),
        |s: &str| format!("str {}", s),
        |pair: (u8, u8)| format!("pair {}", pair.0 + pair.1),
    );
    assert_eq!(describe.call(&-4), "i32 -4");
    assert_eq!(describe.call("text"), "str text");
    assert_eq!(describe.call((2, 3)), "pair 5");
}

#[test]
fn arms_share_captured_state() {
    let seen = RefCell::new(Vec::new());
    (7_u8, 'q', 7_u8).for_each(overload!(
        |n: &u8| seen.borrow_mut().push(n.to_string()),
        |c: &char| seen.borrow_mut().push(c.to_string()),
    ));
    assert_eq!(seen.into_inner(), ["7", "q", "7"]);
}

#[test]
fn anonymous_lifetimes_are_named() {
    let mut lengths = overload!(|s: &'_ String| s.len(), |v: &Vec<&'_ str>| v.len());
    assert_eq!(lengths.call(&String::from("abc")), 3);
    assert_eq!(lengths.call(&vec!["a", "b"]), 2);
}

#[test]
fn lifetimes_in_type_paths_are_named_when_written() {
    use std::borrow::Cow;

    let mut length = overload!(|c: Cow<'_, str>| c.into_owned().len(), |n: u8| usize::from(n));
    assert_eq!(length.call(Cow::Borrowed("abc")), 3);
    assert_eq!(length.call(Cow::Owned(String::from("de"))), 2);
    assert_eq!(length.call(4_u8), 4);
}

#[test]
fn a_single_arm_is_a_call() {
    let double = overload!(|n: u32| n * 2);
    assert_eq!((1_u32, 2_u32).type_transform(double), (2, 4));
}

#[test]
fn overloads_are_usable_by_reference() {
    let mut positive = overload!(|n: &i64| *n > 0, |f: &f64| *f > 0.0);
    assert!((1_i64, 2.0_f64).all_of(&mut positive));
    assert!(!(1_i64, -2.0_f64).all_of(&mut positive));
}

fn is_record_predicate<F>(_: &F)
where
    F: for<'a> Call<&'a u8, Output = bool> + for<'a> Call<&'a char, Output = bool>,
{
}

#[test]
fn arms_are_higher_ranked() {
    let pred = overload!(|n: &u8| *n > 1, |c: &char| c.is_ascii());
    is_record_predicate(&pred);
}

assert_impl_all!(Resolved: Call<u8>, Call<&'static String>);
