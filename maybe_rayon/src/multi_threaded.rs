pub use rayon::{
    current_num_threads,
    iter::{IntoParallelRefMutIterator, ParallelIterator},
    join,
};

pub trait MaybeParallelRefMutExt: for<'a> IntoParallelRefMutIterator<'a> {
    fn maybe_par_iter_mut(&mut self) -> <Self as IntoParallelRefMutIterator<'_>>::Iter {
        self.par_iter_mut()
    }
}

impl<T: for<'a> IntoParallelRefMutIterator<'a>> MaybeParallelRefMutExt for T {}
