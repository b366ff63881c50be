use algebra::{FieldAlgebra, GroupAlgebra};

use crate::errors::{check_domain_size, DomainError};

/// Translates `values` to the coset defined by `generator`: `values[i] *= g^i`, in place.
///
/// Evaluating the result over `{ω^i}` is the same as evaluating the original
/// polynomial over `{g·ω^i}`. Applying it again with `g^(-1)` undoes it.
///
/// The running power `g^i` starts at one and is multiplied by `g` after each
/// entry. A zero generator zeroes every entry past the first; avoiding that is
/// the caller's responsibility.
///
/// Returns an error if `values.len()` is not a power of two. The vector is
/// left untouched in that case.
pub fn multiply_by_coset<F, T>(values: &mut [T], generator: F) -> Result<(), DomainError>
where
    F: FieldAlgebra,
    T: GroupAlgebra<F>,
{
    check_domain_size(values.len())?;

    let mut coset_scale = F::ONE;
    for value in values.iter_mut() {
        *value = *value * coset_scale;
        coset_scale *= generator;
    }

    Ok(())
}

/// Coset contains a generator(coset) element that can be used
/// to compute a coset FFT and its inverse which consequently can be used to
/// compute a coset IFFT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coset<F> {
    pub generator: F,
    pub generator_inv: F,
}

impl<F: FieldAlgebra> Coset<F> {
    pub fn new(generator: F) -> Result<Self, DomainError> {
        let generator_inv =
            Option::<F>::from(generator.invert()).ok_or(DomainError::CosetGeneratorIsZero)?;
        Ok(Self {
            generator,
            generator_inv,
        })
    }
}

#[cfg(test)]
mod tests {
    use algebra::{
        ff::{Field, PrimeField},
        group::Group,
        Fp64, G1Projective, Scalar,
    };
    use rand::thread_rng;

    use super::*;

    #[test]
    fn coset_scales_by_powers() {
        type F = Fp64<97>;
        let g = F::new(5);
        let mut values = vec![F::ONE; 8];
        multiply_by_coset(&mut values, g).unwrap();

        let expected: Vec<_> = (0..8u64).map(|i| g.pow_vartime([i])).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn coset_then_inverse_coset_is_identity() {
        let coset = Coset::new(Scalar::MULTIPLICATIVE_GENERATOR).unwrap();
        let original: Vec<_> = (0..32)
            .map(|_| Scalar::random(&mut thread_rng()))
            .collect();

        let mut values = original.clone();
        multiply_by_coset(&mut values, coset.generator).unwrap();
        assert_ne!(values, original);
        multiply_by_coset(&mut values, coset.generator_inv).unwrap();
        assert_eq!(values, original);
    }

    #[test]
    fn coset_on_group_elements() {
        let g = Scalar::from(3u64);
        let points: Vec<_> = (0..4)
            .map(|_| G1Projective::random(&mut thread_rng()))
            .collect();

        let mut shifted = points.clone();
        multiply_by_coset(&mut shifted, g).unwrap();

        let mut power = Scalar::ONE;
        for (got, point) in shifted.iter().zip(&points) {
            assert_eq!(*got, point * power);
            power *= g;
        }
    }

    #[test]
    fn zero_generator() {
        assert_eq!(
            Coset::new(Scalar::ZERO),
            Err(DomainError::CosetGeneratorIsZero)
        );

        // Not an error for the raw shift: only the first entry survives.
        let mut values = vec![Scalar::from(9u64); 4];
        multiply_by_coset(&mut values, Scalar::ZERO).unwrap();
        assert_eq!(
            values,
            vec![Scalar::from(9u64), Scalar::ZERO, Scalar::ZERO, Scalar::ZERO]
        );
    }

    #[test]
    fn coset_rejects_non_power_of_two() {
        let original = vec![Scalar::from(5u64); 6];
        let mut values = original.clone();
        assert_eq!(
            multiply_by_coset(&mut values, Scalar::from(2u64)),
            Err(DomainError::DomainSizeNotPowerOfTwo { domain_size: 6 })
        );
        assert_eq!(values, original);

        let mut empty: Vec<Scalar> = Vec::new();
        assert_eq!(
            multiply_by_coset(&mut empty, Scalar::from(2u64)),
            Err(DomainError::DomainSizeNotPowerOfTwo { domain_size: 0 })
        );
    }
}
