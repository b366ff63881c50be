pub use std::iter::{IntoIterator, Iterator};

/// Sequential stand-in for `rayon::join`: runs `oper_a` and then `oper_b`
/// on the calling thread.
#[inline]
pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (oper_a(), oper_b())
}

/// Without rayon there is exactly one worker: the caller.
#[inline]
pub const fn current_num_threads() -> usize {
    1
}

pub trait MaybeParallelRefMutExt {
    type Item;
    type Iter<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;
    fn maybe_par_iter_mut(&mut self) -> Self::Iter<'_>;
}

impl<T: IntoIterator> MaybeParallelRefMutExt for T
where
    for<'a> &'a mut T: IntoIterator<Item = &'a mut <T as IntoIterator>::Item>,
{
    type Item = <T as IntoIterator>::Item;
    type Iter<'a>
        = <&'a mut T as IntoIterator>::IntoIter
    where
        Self: 'a;

    fn maybe_par_iter_mut(&mut self) -> Self::Iter<'_> {
        self.into_iter()
    }
}
