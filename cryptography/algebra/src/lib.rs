pub mod batch_inversion;
mod fp64;

use std::ops::{Add, Mul, Neg, Sub};

// Re-export ff and group, so other crates do not need to directly import(and independently version) them
pub use ff;
pub use fp64::{Fp64, Goldilocks, GOLDILOCKS_MODULUS};
pub use group;

use ff::{Field, PrimeField};
use group::Group;

pub type Scalar = blstrs::Scalar;

pub type G1Projective = blstrs::G1Projective;
pub type G2Projective = blstrs::G2Projective;

/// A finite field which is able to hand out primitive roots of unity of
/// power-of-two order.
///
/// Arithmetic, inversion and the identities come from `ff::Field`; this trait
/// only adds what an FFT needs on top of that.
pub trait FieldAlgebra: Field {
    /// The largest `s` such that `2^s` divides `p - 1`.
    ///
    /// Roots of unity exist for every power-of-two order up to `2^TWO_ADICITY`.
    const TWO_ADICITY: u32;

    /// A primitive `2^TWO_ADICITY`-th root of unity.
    fn two_adic_root_of_unity() -> Self;

    /// Embeds an integer into the field, reducing it modulo the characteristic.
    fn from_u64(value: u64) -> Self;

    /// Returns a primitive `order`-th root of unity.
    ///
    /// Returns `None` if `order` is not a power of two or exceeds `2^TWO_ADICITY`.
    fn root_of_unity(order: usize) -> Option<Self> {
        if !order.is_power_of_two() {
            return None;
        }

        let log_order = order.trailing_zeros();
        if log_order > Self::TWO_ADICITY {
            return None;
        }

        // Squaring a primitive 2^s-th root yields a primitive 2^(s-1)-th root,
        // so we square `TWO_ADICITY - log_order` times.
        let mut root = Self::two_adic_root_of_unity();
        for _ in log_order..Self::TWO_ADICITY {
            root = root.square();
        }
        Some(root)
    }
}

/// An abelian group on which the field `F` acts by scalar multiplication.
///
/// This is the element type of a vector which can be transformed by the FFT.
/// The twiddle factors always stay in `F`, and `Mul<F>` is the only operation
/// connecting the two structures.
pub trait GroupAlgebra<F: FieldAlgebra>:
    Sized
    + Send
    + Sync
    + Copy
    + 'static
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<F, Output = Self>
{
    /// The identity element of the group.
    fn zero() -> Self;
}

// Every field is a group over itself, with the field multiplication as the scalar action.
impl<F: FieldAlgebra> GroupAlgebra<F> for F {
    fn zero() -> Self {
        F::ZERO
    }
}

impl FieldAlgebra for Scalar {
    const TWO_ADICITY: u32 = <Self as PrimeField>::S;

    fn two_adic_root_of_unity() -> Self {
        <Self as PrimeField>::ROOT_OF_UNITY
    }

    fn from_u64(value: u64) -> Self {
        Self::from(value)
    }
}

impl GroupAlgebra<Scalar> for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

impl GroupAlgebra<Scalar> for G2Projective {
    fn zero() -> Self {
        Self::identity()
    }
}
