use algebra::{FieldAlgebra, GroupAlgebra};

use crate::{
    errors::{check_domain_size, DomainError},
    fft::{dit_merge, dit_stages, is_primitive_root_of_unity, reverse_bit_order},
};

/// Sub-transforms with at most this many elements are never split further;
/// below this size the cost of handing work to another thread dominates.
pub(crate) const PARALLEL_CUTOFF: usize = 1 << 10;

/// A multi-threaded version of [`serial_radix2_fft`](crate::fft::serial_radix2_fft).
///
/// The output is identical to the serial transform for every input.
///
/// After the bit-reversal permutation, the lower half of the slice holds the
/// even-indexed inputs and the upper half the odd-indexed ones, so each half is
/// a transform of half the size with root `ω^2`. The halves are transformed
/// concurrently and then merged with one butterfly pass pairing `i` with `i + n/2`.
///
/// Splitting stops once every worker thread has its own sub-problem, or when a
/// sub-problem has at most 1024 elements; the rest runs serially
/// on the worker that owns it. Without the `multithreaded` feature there is a
/// single worker and this is exactly the serial algorithm.
///
/// Returns an error if `values.len()` is not a power of two.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = values.len())))]
pub fn parallel_radix2_fft<F, T>(values: &mut [T], omega: F) -> Result<(), DomainError>
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    let n = values.len();
    check_domain_size(n)?;
    debug_assert!(
        is_primitive_root_of_unity(omega, n),
        "omega must be a primitive root of unity of order {n}"
    );

    let max_depth = maybe_rayon::fork_depth();
    #[cfg(feature = "tracing")]
    tracing::debug!(max_depth, cutoff = PARALLEL_CUTOFF, "forking radix-2 fft");

    reverse_bit_order(values);
    fork_join_dit(values, omega, max_depth, PARALLEL_CUTOFF);

    Ok(())
}

/// Runs the butterfly stages of a bit-reversed input, forking the two halves
/// while `depth > 0` and the slice is longer than `cutoff`.
///
/// Each branch owns a disjoint half of `values` for its whole subtree. The
/// final merge only starts once both branches have returned.
pub(crate) fn fork_join_dit<F, T>(values: &mut [T], omega: F, depth: u32, cutoff: usize)
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    let n = values.len();
    if depth == 0 || n <= cutoff || n < 2 {
        dit_stages(values, omega);
        return;
    }

    let omega_squared = omega.square();
    let (lo, hi) = values.split_at_mut(n / 2);

    maybe_rayon::join(
        || fork_join_dit(lo, omega_squared, depth - 1, cutoff),
        || fork_join_dit(hi, omega_squared, depth - 1, cutoff),
    );

    // Last stage of the transform: the butterflies span the whole slice.
    dit_merge(lo, hi, omega);
}
