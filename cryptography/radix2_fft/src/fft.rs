use algebra::{FieldAlgebra, GroupAlgebra};

use crate::errors::{check_domain_size, DomainError};

/// Computes the radix-2 FFT of `values` over the set `{ω^0, ..., ω^(n-1)}`, in place.
///
/// Treating `values` as the coefficients of a polynomial `a(x)`, the output is
/// `[a(ω^0), a(ω^1), ..., a(ω^(n-1))]`. Running the same routine with `ω^(-1)`
/// and scaling the result by `1/n` performs the inverse transform.
///
/// `values` may hold field elements or elements of any group the field acts
/// on; the twiddle factors are always field elements.
///
/// `omega` must be a primitive `n`-th root of unity where `n = values.len()`.
/// This is not checked in release builds: a wrong root gives a wrong answer,
/// not an error. For `n = 1` the transform is the identity for every `omega`.
///
/// Returns an error if `values.len()` is not a power of two.
pub fn serial_radix2_fft<F, T>(values: &mut [T], omega: F) -> Result<(), DomainError>
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

    reverse_bit_order(values);
    dit_stages(values, omega);

    Ok(())
}

/// Runs every butterfly stage of a decimation-in-time FFT on input that is
/// already in bit-reversed order.
///
/// Blocks of size `2^s` only ever touch their own indices, so a slice can be
/// handed to this function on its own, with the root of unity matching its length.
pub(crate) fn dit_stages<F, T>(values: &mut [T], omega: F)
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    let omegas = precompute_omegas(&omega, values.len());
    for (layer, stage_root) in omegas.into_iter().enumerate() {
        dit_layer(values, 1 << layer, stage_root);
    }
}

#[inline]
fn dit_layer<F, T>(blocks: &mut [T], half_block_size: usize, omega: F)
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    for block in blocks.chunks_mut(2 * half_block_size) {
        let (a, b) = block.split_at_mut(half_block_size);
        dit_merge(a, b, omega);
    }
}

/// Applies the butterfly to the pairs `(lo[j], hi[j])` with twiddle `ω^j`.
///
/// The twiddles are produced by repeated multiplication, starting from one.
#[inline]
pub(crate) fn dit_merge<F, T>(lo: &mut [T], hi: &mut [T], omega: F)
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    let mut twiddle = F::ONE;
    for (a, b) in lo.iter_mut().zip(hi) {
        dit(a, b, twiddle);
        twiddle *= omega;
    }
}

/// `(a, b) <- (a + twiddle * b, a - twiddle * b)`
#[inline]
fn dit<F, T>(a: &mut T, b: &mut T, twiddle: F)
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    let t = if twiddle == F::ONE {
        *b
    } else if twiddle == -F::ONE {
        -*b
    } else if *b == T::zero() {
        T::zero()
    } else {
        *b * twiddle
    };
    *b = *a;
    *a = *a + t;
    *b = *b - t;
}

/// Reverses the least significant `bits` of the given number `n`.
///
/// `n` - The input number whose bits are to be reversed.
/// `bits` - The number of least significant bits to reverse.
///
/// Returns a new `usize` with the specified number of bits reversed.
pub(crate) const fn reverse_bits(n: usize, bits: u32) -> usize {
    // NB: The only reason we need overflowing_shr() here as opposed
    // to plain '>>' is to accommodate the case n == num_bits == 0,
    // which would become `0 >> 64`. Rust thinks that any shift of 64
    // bits causes overflow, even when the argument is zero.
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// In-place bit-reversal permutation of a slice.
///
/// Reorders the elements of the slice `a` in-place by reversing the binary representation of their indices.
///
/// For example, if `a.len() == 8` (i.e., `log2(n) = 3`), the index permutation would be:
///
/// ```text
/// Index  Binary   Reversed   Swapped With
/// -----  -------  ---------  -------------
///   0     000       000           -
///   1     001       100           4
///   2     010       010           -
///   3     011       110           6
///   4     100       001           1
///   5     101       101           -
///   6     110       011           3
///   7     111       111           -
/// ```
///
/// This transformation is its own inverse, so applying it twice restores the original order.
///
/// # Panics
/// Panics if the slice length is not a power of two.
pub fn reverse_bit_order<T>(a: &mut [T]) {
    // An empty slice has nothing to permute, and its length is not a power of two.
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "n must be a power of two");

    let log_n = log2_pow2(n);

    for k in 0..n {
        let rk = reverse_bits(k, log_n);

        // Swap only if k < rk to avoid double-swapping
        if k < rk {
            a.swap(rk, k);
        }
    }
}

/// We assume that `n` is a power of 2.
pub(crate) const fn log2_pow2(n: usize) -> u32 {
    n.trailing_zeros()
}

/// Returns `[ω_{2}, ω_{4}, ..., ω_{n}]` given input `omega` = `ω_{n}`.
///
/// Entry `s` is the root used by the butterflies of stage `s + 1`, which work
/// on blocks of size `2^(s + 1)`.
pub(crate) fn precompute_omegas<F: FieldAlgebra>(omega: &F, n: usize) -> Vec<F> {
    let log_n = log2_pow2(n);
    (0..log_n)
        .map(|s| omega.pow_vartime([(n >> (s + 1)) as u64]))
        .collect()
}

/// Returns true if `omega` has multiplicative order exactly `n`.
///
/// `n` must be a power of two. Any element passes for `n = 1`, since the
/// transform of length one never looks at the root.
pub(crate) fn is_primitive_root_of_unity<F: FieldAlgebra>(omega: F, n: usize) -> bool {
    if n <= 1 {
        return true;
    }
    omega.pow_vartime([n as u64]) == F::ONE && omega.pow_vartime([(n / 2) as u64]) != F::ONE
}
