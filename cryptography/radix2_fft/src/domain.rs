use std::iter::successors;

use algebra::{FieldAlgebra, GroupAlgebra};
use maybe_rayon::prelude::*;

use crate::{
    coset::{multiply_by_coset, Coset},
    errors::{check_domain_size, DomainError},
    lagrange::evaluate_all_lagrange_polynomials,
};

// Both transforms produce the same output; the parallel one only pays off with rayon.
#[cfg(not(feature = "multithreaded"))]
use crate::fft::serial_radix2_fft as radix2_fft;
#[cfg(feature = "multithreaded")]
use crate::parallel_fft::parallel_radix2_fft as radix2_fft;

/// A struct representing a set of points that are roots of unity,
/// which allows us to efficiently evaluate and interpolate polynomial
/// over these points using FFT.
///
/// Every transform on the domain accepts field elements as well as any group
/// the field acts on.
#[derive(Debug, Clone)]
pub struct Radix2Domain<F> {
    /// Number of points in the domain. Always a power of two.
    size: usize,
    /// size of the domain as a field element
    pub domain_size: F,
    /// Inverse of the domain size as a field element
    pub domain_size_inv: F,
    /// Generator for this domain
    // Element has order `size`
    pub generator: F,
    /// Inverse of the generator for the domain
    /// This is cached for IFFT
    pub generator_inv: F,
}

impl<F: FieldAlgebra> Radix2Domain<F> {
    /// Creates the domain of the `size`-th roots of unity.
    ///
    /// `size` is not rounded up: it must be a power of two, and the field must
    /// contain a root of unity of that order.
    pub fn new(size: usize) -> Result<Self, DomainError> {
        check_domain_size(size)?;

        let generator = F::root_of_unity(size).ok_or(DomainError::DomainSizeTooLarge {
            domain_size: size,
            max_domain_size: 1u64.checked_shl(F::TWO_ADICITY).unwrap_or(u64::MAX),
        })?;
        let generator_inv = generator.invert().expect("generator should not be zero");

        let domain_size = F::from_u64(size as u64);
        let domain_size_inv = Option::<F>::from(domain_size.invert())
            .ok_or(DomainError::DomainSizeNotInvertible { domain_size: size })?;

        Ok(Self {
            size,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
        })
    }

    /// The size of the domain
    ///
    /// Note: This is always a power of two
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `ω^index`.
    pub fn element(&self, index: usize) -> F {
        self.generator.pow_vartime([index as u64])
    }

    /// Returns `[ω^0, ω^1, ..., ω^(size-1)]`.
    pub fn elements(&self) -> Vec<F> {
        successors(Some(F::ONE), |root| Some(*root * self.generator))
            .take(self.size)
            .collect()
    }

    /// Evaluates a polynomial at the points in the domain.
    ///
    /// The polynomial is padded with zeroes up to the size of the domain.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn fft<T: GroupAlgebra<F>>(&self, values: Vec<T>) -> Result<Vec<T>, DomainError> {
        let mut values = self.pad_to_domain_size(values)?;
        radix2_fft(&mut values, self.generator)?;
        Ok(values)
    }

    /// Interpolates the points over the domain to get a polynomial
    /// in monomial form.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn ifft<T: GroupAlgebra<F>>(&self, values: Vec<T>) -> Result<Vec<T>, DomainError> {
        let mut values = self.pad_to_domain_size(values)?;
        radix2_fft(&mut values, self.generator_inv)?;

        let domain_size_inv = self.domain_size_inv;
        values
            .maybe_par_iter_mut()
            .for_each(|element| *element = *element * domain_size_inv);

        Ok(values)
    }

    /// Evaluates a polynomial at the points in the domain multiplied by a coset
    /// generator `g`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn coset_fft<T: GroupAlgebra<F>>(
        &self,
        values: Vec<T>,
        coset: &Coset<F>,
    ) -> Result<Vec<T>, DomainError> {
        let mut values = self.pad_to_domain_size(values)?;
        multiply_by_coset(&mut values, coset.generator)?;
        radix2_fft(&mut values, self.generator)?;
        Ok(values)
    }

    /// Interpolates a polynomial over the coset of a domain
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(size = self.size)))]
    pub fn coset_ifft<T: GroupAlgebra<F>>(
        &self,
        values: Vec<T>,
        coset: &Coset<F>,
    ) -> Result<Vec<T>, DomainError> {
        let mut coset_coeffs = self.ifft(values)?;
        multiply_by_coset(&mut coset_coeffs, coset.generator_inv)?;
        Ok(coset_coeffs)
    }

    /// Evaluates every Lagrange basis polynomial of the domain at `t`.
    ///
    /// See [`evaluate_all_lagrange_polynomials`].
    pub fn evaluate_all_lagrange_polynomials(&self, t: F) -> Result<Vec<F>, DomainError> {
        evaluate_all_lagrange_polynomials(self.size, self.generator, t)
    }

    /// Evaluates the vanishing polynomial `Z(x) = x^size - 1` at `t`.
    pub fn evaluate_vanishing_polynomial(&self, t: F) -> F {
        t.pow_vartime([self.size as u64]) - F::ONE
    }

    /// Adds `coeff * Z(x)` to the polynomial `h`, given in monomial form.
    ///
    /// `h` needs a coefficient for `x^size`, so it must have more than `size` entries.
    pub fn add_poly_z(&self, coeff: F, h: &mut [F]) -> Result<(), DomainError> {
        if h.len() <= self.size {
            return Err(DomainError::PolynomialTooShort {
                num_coefficients: h.len(),
                min_num_coefficients: self.size + 1,
            });
        }

        h[self.size] += coeff;
        h[0] -= coeff;

        Ok(())
    }

    /// Divides evaluations over the coset `g·S` by the vanishing polynomial of `S`.
    ///
    /// On the coset, `Z(g·ω^i) = g^size - 1` for every `i`, so this is a single
    /// scaling by a constant.
    pub fn divide_by_z_on_coset(
        &self,
        evaluations: &mut [F],
        coset: &Coset<F>,
    ) -> Result<(), DomainError> {
        let z_at_coset = self.evaluate_vanishing_polynomial(coset.generator);
        let z_inv_at_coset =
            Option::<F>::from(z_at_coset.invert()).ok_or(DomainError::CosetIsDomain)?;

        for evaluation in evaluations.iter_mut() {
            *evaluation *= z_inv_at_coset;
        }

        Ok(())
    }

    /// Pads `values` with zeroes up to the size of the domain.
    fn pad_to_domain_size<T: GroupAlgebra<F>>(
        &self,
        mut values: Vec<T>,
    ) -> Result<Vec<T>, DomainError> {
        if values.len() > self.size {
            return Err(DomainError::TooManyValues {
                num_values: values.len(),
                domain_size: self.size,
            });
        }
        values.resize(self.size, T::zero());
        Ok(values)
    }
}
