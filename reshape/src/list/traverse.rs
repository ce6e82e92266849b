//! Visiting every element of a list with a [`Call`], for effects or to test a predicate.

use crate::call::Call;

/// Call `f` on every element of a list, front to back, discarding the outputs.
pub trait ForEach<F> {
    /// Visit every element.
    fn for_each_slot(self, f: &mut F);
}

impl<F> ForEach<F> for () {
    fn for_each_slot(self, _: &mut F) {}
}

impl<F: Call<H>, H, T: ForEach<F>> ForEach<F> for (H, T) {
    fn for_each_slot(self, f: &mut F) {
        let (head, tail) = self;
        let _ = <F as Call<H>>::call(f, head);
        tail.for_each_slot(f);
    }
}

/// Test whether a predicate holds for every element of a list, stopping at the first element for
/// which it does not.
pub trait AllOf<F> {
    /// `true` if `f` returns `true` for every element (vacuously so for the empty list).
    fn all_of(self, f: &mut F) -> bool;
}

impl<F> AllOf<F> for () {
    fn all_of(self, _: &mut F) -> bool {
        true
    }
}

impl<F, H, T> AllOf<F> for (H, T)
where
    F: Call<H>,
    F::Output: Into<bool>,
    T: AllOf<F>,
{
    fn all_of(self, f: &mut F) -> bool {
        let (head, tail) = self;
        Into::<bool>::into(<F as Call<H>>::call(f, head)) && tail.all_of(f)
    }
}

/// Test whether a predicate holds for some element of a list, stopping at the first element for
/// which it does.
pub trait AnyOf<F> {
    /// `true` if `f` returns `true` for any element (never so for the empty list).
    fn any_of(self, f: &mut F) -> bool;
}

impl<F> AnyOf<F> for () {
    fn any_of(self, _: &mut F) -> bool {
        false
    }
}

impl<F, H, T> AnyOf<F> for (H, T)
where
    F: Call<H>,
    F::Output: Into<bool>,
    T: AnyOf<F>,
{
    fn any_of(self, f: &mut F) -> bool {
        let (head, tail) = self;
        Into::<bool>::into(<F as Call<H>>::call(f, head)) || tail.any_of(f)
    }
}

/// Count the elements of a list for which a predicate holds. Every element is visited.
pub trait CountIf<F> {
    /// The number of elements for which `f` returns `true`.
    fn count_if(self, f: &mut F) -> usize;
}

impl<F> CountIf<F> for () {
    fn count_if(self, _: &mut F) -> usize {
        0
    }
}

impl<F, H, T> CountIf<F> for (H, T)
where
    F: Call<H>,
    F::Output: Into<bool>,
    T: CountIf<F>,
{
    fn count_if(self, f: &mut F) -> usize {
        let (head, tail) = self;
        let hit = usize::from(Into::<bool>::into(<F as Call<H>>::call(f, head)));
        hit + tail.count_if(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which it is called, and answers `true` for non-zero numbers.
    #[derive(Default)]
    struct Trace(Vec<u64>);

    impl<'a, N: Into<u64> + Copy> Call<&'a N> for Trace {
        type Output = bool;

        fn call(&mut self, arg: &'a N) -> bool {
            let n: u64 = (*arg).into();
            self.0.push(n);
            n != 0
        }
    }

    #[test]
    fn all_of_stops_at_the_first_failure() {
        let mut trace = Trace::default();
        assert!(!(&1u8, (&0u16, (&3u32, ()))).all_of(&mut trace));
        assert_eq!(trace.0, vec![1, 0]);
    }

    #[test]
    fn any_of_stops_at_the_first_success() {
        let mut trace = Trace::default();
        assert!((&0u8, (&2u16, (&3u32, ()))).any_of(&mut trace));
        assert_eq!(trace.0, vec![0, 2]);
    }

    #[test]
    fn count_if_visits_everything() {
        let mut trace = Trace::default();
        assert_eq!((&0u8, (&2u16, (&3u32, ()))).count_if(&mut trace), 2);
        assert_eq!(trace.0, vec![0, 2, 3]);
    }

    #[test]
    fn empty_list_identities() {
        let mut trace = Trace::default();
        assert!(().all_of(&mut trace));
        assert!(!().any_of(&mut trace));
        assert_eq!(().count_if(&mut trace), 0);
        assert!(trace.0.is_empty());
    }
}
