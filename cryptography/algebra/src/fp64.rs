//! Prime fields whose modulus fits in a machine word.
//!
//! These are far too small for cryptography on their own, but they have the
//! same shape as the large scalar fields: the tiny ones make hand-checkable
//! test vectors and `Goldilocks` gives cheap arithmetic with 2-adicity 32.

use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use ff::Field;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::FieldAlgebra;

/// Goldilocks prime `p = 2^64 - 2^32 + 1`.
pub const GOLDILOCKS_MODULUS: u64 = 0xffff_ffff_0000_0001;

/// The Goldilocks field, with 2-adicity 32.
pub type Goldilocks = Fp64<GOLDILOCKS_MODULUS>;

/// An element of the prime field `Z/PZ`.
///
/// `P` must be an odd prime. The element is always stored as its canonical
/// representative in `[0, P)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp64<const P: u64>(u64);

impl<const P: u64> Fp64<P> {
    /// Rejects `P <= 2` and even moduli at compile time. The non-residue search
    /// never terminates for `P = 2`.
    const MODULUS_IS_ODD: () = assert!(P > 2 && P % 2 == 1, "modulus must be an odd prime");

    /// Reduces `value` modulo `P`.
    pub const fn new(value: u64) -> Self {
        let () = Self::MODULUS_IS_ODD;
        Self(value % P)
    }

    /// The canonical representative in `[0, P)`.
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    const fn add_raw(a: u64, b: u64) -> u64 {
        let sum = (a as u128) + (b as u128);
        if sum >= P as u128 {
            (sum - P as u128) as u64
        } else {
            sum as u64
        }
    }

    #[inline]
    const fn sub_raw(a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + (P - b)
        }
    }

    #[inline]
    const fn mul_raw(a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % P as u128) as u64
    }

    /// Euler's criterion. Zero is reported as a non-residue.
    fn is_quadratic_residue(&self) -> bool {
        self.pow_vartime([(P - 1) / 2]) == Self::ONE
    }

    /// The smallest quadratic non-residue.
    fn quadratic_non_residue() -> Self {
        let () = Self::MODULUS_IS_ODD;
        let mut candidate = Self::new(2);
        while candidate.is_quadratic_residue() {
            candidate += Self::ONE;
        }
        candidate
    }

    /// Tonelli–Shanks. Returns `None` for non-residues.
    fn sqrt_vartime(&self) -> Option<Self> {
        if self.is_zero_vartime() {
            return Some(Self::ZERO);
        }
        if !self.is_quadratic_residue() {
            return None;
        }

        let odd_part = (P - 1) >> Self::TWO_ADICITY;

        let mut m = Self::TWO_ADICITY;
        let mut c = Self::two_adic_root_of_unity();
        let mut t = self.pow_vartime([odd_part]);
        let mut root = self.pow_vartime([(odd_part + 1) / 2]);

        while t != Self::ONE {
            // Least i such that t^(2^i) = 1. Since `self` is a residue, i < m.
            let mut i = 0;
            let mut t_pow = t;
            while t_pow != Self::ONE {
                t_pow = t_pow.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t *= c;
            root *= b;
        }

        Some(root)
    }
}

impl<const P: u64> From<u64> for Fp64<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_binop {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $raw:ident) => {
        impl<const P: u64> $op for Fp64<P> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(Self::$raw(self.0, rhs.0))
            }
        }

        impl<'a, const P: u64> $op<&'a Self> for Fp64<P> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: &'a Self) -> Self {
                <Self as $op>::$method(self, *rhs)
            }
        }

        impl<const P: u64> $op_assign for Fp64<P> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = <Self as $op>::$method(*self, rhs);
            }
        }

        impl<'a, const P: u64> $op_assign<&'a Self> for Fp64<P> {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a Self) {
                *self = <Self as $op>::$method(*self, *rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add_raw);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub_raw);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul_raw);

impl<const P: u64> Neg for Fp64<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> Sum for Fp64<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, const P: u64> Sum<&'a Self> for Fp64<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<const P: u64> Product for Fp64<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, const P: u64> Product<&'a Self> for Fp64<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<const P: u64> ConstantTimeEq for Fp64<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const P: u64> ConditionallySelectable for Fp64<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u64::conditional_select(&a.0, &b.0, choice))
    }
}

impl<const P: u64> Field for Fp64<P> {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1 % P);

    fn random(mut rng: impl RngCore) -> Self {
        // Rejection sampling below the largest multiple of P avoids modulo bias.
        let zone = u64::MAX - (u64::MAX % P);
        loop {
            let candidate = rng.next_u64();
            if candidate < zone {
                return Self(candidate % P);
            }
        }
    }

    fn square(&self) -> Self {
        *self * *self
    }

    fn double(&self) -> Self {
        *self + *self
    }

    fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem
        CtOption::new(self.pow_vartime([P - 2]), !self.is_zero())
    }

    // Note: not constant time. Square roots are never used on secret data here.
    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        if num.is_zero_vartime() {
            return (Choice::from(1), Self::ZERO);
        }
        if div.is_zero_vartime() {
            return (Choice::from(0), Self::ZERO);
        }

        let ratio = *num * div.pow_vartime([P - 2]);
        match ratio.sqrt_vartime() {
            Some(root) => (Choice::from(1), root),
            None => {
                // A primitive 2^s-th root of unity is a non-residue, so this product is a square.
                let twisted = ratio * Self::two_adic_root_of_unity();
                (Choice::from(0), twisted.sqrt_vartime().unwrap_or(Self::ZERO))
            }
        }
    }
}

impl<const P: u64> FieldAlgebra for Fp64<P> {
    const TWO_ADICITY: u32 = (P - 1).trailing_zeros();

    fn two_adic_root_of_unity() -> Self {
        // g^((p-1)/2) = -1 for a non-residue g, so g raised to the odd part of
        // p - 1 has order exactly 2^s.
        Self::quadratic_non_residue().pow_vartime([(P - 1) >> Self::TWO_ADICITY])
    }

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }
}
