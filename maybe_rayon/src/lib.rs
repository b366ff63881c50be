//! A facade over `rayon` which compiles down to plain sequential code when the
//! `multithreaded` feature is disabled.
//!
//! Callers write the parallel version of their code once against this crate,
//! and the feature flag decides whether it runs on rayon's thread pool.

#[cfg(feature = "multithreaded")]
mod multi_threaded;
#[cfg(not(feature = "multithreaded"))]
mod single_threaded;

#[cfg(feature = "multithreaded")]
pub use multi_threaded::*;
#[cfg(not(feature = "multithreaded"))]
pub use single_threaded::*;

pub mod prelude {
    #[cfg(feature = "multithreaded")]
    pub use rayon::prelude::*;

    pub use crate::{MaybeParallelRefMutExt, *};
}

/// Number of fork/join levels needed so that every worker thread can be handed
/// its own sub-problem.
///
/// This is `ceil(log2(current_num_threads()))`, which is zero when only one
/// thread is available.
pub fn fork_depth() -> u32 {
    current_num_threads().max(1).next_power_of_two().trailing_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn join_runs_both_closures() {
        let mut left = vec![1u64, 2, 3];
        let mut right = vec![4u64, 5, 6];

        let (sum_left, sum_right) = join(
            || left.iter().sum::<u64>(),
            || right.iter().sum::<u64>(),
        );
        assert_eq!(sum_left, 6);
        assert_eq!(sum_right, 15);

        left.maybe_par_iter_mut().for_each(|x| *x *= 2);
        right.maybe_par_iter_mut().for_each(|x| *x += 1);
        assert_eq!(left, vec![2, 4, 6]);
        assert_eq!(right, vec![5, 6, 7]);
    }

    #[test]
    fn fork_depth_covers_every_thread() {
        let depth = fork_depth();
        assert!(1usize << depth >= current_num_threads());
        #[cfg(not(feature = "multithreaded"))]
        assert_eq!(depth, 0);
    }
}
