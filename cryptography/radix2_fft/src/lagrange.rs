use algebra::{batch_inversion::batch_inverse, FieldAlgebra};

use crate::{
    errors::{check_domain_size, DomainError},
    fft::is_primitive_root_of_unity,
};

/// Computes the `m` Lagrange coefficients, relative to the set
/// `S = {ω^0, ..., ω^(m-1)}`, at the field element `t`.
///
/// Entry `i` of the result is `L_i(t)`, where `L_i` is the unique polynomial of
/// degree below `m` which is one at `ω^i` and zero on the rest of `S`.
///
/// With `Z(t) = t^m - 1` the vanishing polynomial of `S`:
/// - if `Z(t) != 0`, then `L_i(t) = Z(t) * ω^i / (m * (t - ω^i))`. The `m`
///   denominators are inverted together with a single field inversion.
/// - if `Z(t) = 0`, then `t = ω^j` for some `j` and the result is the indicator
///   vector of `j`.
///
/// `omega` must be a primitive `m`-th root of unity; this is not checked in
/// release builds.
///
/// Returns an error if `m` is not a power of two, or if `m` is zero in the field.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(m = m)))]
pub fn evaluate_all_lagrange_polynomials<F: FieldAlgebra>(
    m: usize,
    omega: F,
    t: F,
) -> Result<Vec<F>, DomainError> {
    check_domain_size(m)?;
    debug_assert!(
        is_primitive_root_of_unity(omega, m),
        "omega must be a primitive root of unity of order {m}"
    );

    if m == 1 {
        return Ok(vec![F::ONE]);
    }

    let z_t = t.pow_vartime([m as u64]) - F::ONE;

    if z_t.is_zero_vartime() {
        return Ok(indicator_of_domain_point(m, omega, t));
    }

    let m_inv = Option::<F>::from(F::from_u64(m as u64).invert())
        .ok_or(DomainError::DomainSizeNotInvertible { domain_size: m })?;

    // numerators[i] = Z(t) * ω^i / m, denominators[i] = t - ω^i
    let mut numerator = z_t * m_inv;
    let mut omega_i = F::ONE;
    let mut numerators = Vec::with_capacity(m);
    let mut denominators = Vec::with_capacity(m);
    for _ in 0..m {
        numerators.push(numerator);
        denominators.push(t - omega_i);
        numerator *= omega;
        omega_i *= omega;
    }

    batch_inverse(&mut denominators);

    Ok(numerators
        .into_iter()
        .zip(denominators)
        .map(|(numerator, denominator_inv)| numerator * denominator_inv)
        .collect())
}

/// `t` is a domain point: `L_j(t) = 1` for `t = ω^j`, and every other basis
/// polynomial vanishes there.
///
/// If no power of `omega` equals `t` (only possible when `omega` is not a
/// primitive root of order `m`), the zero vector is returned.
fn indicator_of_domain_point<F: FieldAlgebra>(m: usize, omega: F, t: F) -> Vec<F> {
    let mut coefficients = vec![F::ZERO; m];

    let mut omega_i = F::ONE;
    for coefficient in &mut coefficients {
        if omega_i == t {
            *coefficient = F::ONE;
            break;
        }
        omega_i *= omega;
    }

    coefficients
}

#[cfg(test)]
mod tests {
    use algebra::{ff::Field, Fp64, Scalar};
    use proptest::prelude::*;
    use rand::thread_rng;

    use super::*;

    type F17 = Fp64<17>;

    #[test]
    fn lagrange_at_domain_point_is_indicator() {
        let m = 8;
        let omega = F17::root_of_unity(m).unwrap();
        let t = omega.pow_vartime([3]);

        let coefficients = evaluate_all_lagrange_polynomials(m, omega, t).unwrap();

        let mut expected = vec![F17::ZERO; m];
        expected[3] = F17::ONE;
        assert_eq!(coefficients, expected);
    }

    #[test]
    fn lagrange_at_every_domain_point() {
        let m = 16;
        let omega = Scalar::root_of_unity(m).unwrap();

        let mut t = Scalar::ONE;
        for j in 0..m {
            let coefficients = evaluate_all_lagrange_polynomials(m, omega, t).unwrap();
            for (i, coefficient) in coefficients.iter().enumerate() {
                let expected = if i == j { Scalar::ONE } else { Scalar::ZERO };
                assert_eq!(*coefficient, expected);
            }
            t *= omega;
        }
    }

    #[test]
    fn lagrange_reconstructs_monomials() {
        // x^j takes the value ω^(ij) at ω^i, and has degree below m, so
        // interpolating those values at t must give t^j.
        let m = 8;
        let omega = Scalar::root_of_unity(m).unwrap();
        let t = Scalar::random(&mut thread_rng());
        let coefficients = evaluate_all_lagrange_polynomials(m, omega, t).unwrap();

        for j in 0..m as u64 {
            let omega_j = omega.pow_vartime([j]);
            let mut node_value = Scalar::ONE;
            let mut got = Scalar::ZERO;
            for coefficient in &coefficients {
                got += *coefficient * node_value;
                node_value *= omega_j;
            }
            assert_eq!(got, t.pow_vartime([j]));
        }
    }

    #[test]
    fn lagrange_coefficients_sum_to_one() {
        // The constant polynomial 1 interpolates to 1 everywhere.
        let m = 32;
        let omega = F17::root_of_unity(16).unwrap();
        let coefficients = evaluate_all_lagrange_polynomials(16, omega, F17::ZERO).unwrap();
        assert_eq!(coefficients.iter().sum::<F17>(), F17::ONE);

        let omega = Scalar::root_of_unity(m).unwrap();
        let t = Scalar::random(&mut thread_rng());
        let coefficients = evaluate_all_lagrange_polynomials(m, omega, t).unwrap();
        assert_eq!(coefficients.iter().sum::<Scalar>(), Scalar::ONE);
    }

    #[test]
    fn lagrange_domain_of_size_one() {
        let t = Scalar::from(1234u64);
        assert_eq!(
            evaluate_all_lagrange_polynomials(1, Scalar::ONE, t).unwrap(),
            vec![Scalar::ONE]
        );
    }

    #[test]
    fn lagrange_rejects_non_power_of_two() {
        assert_eq!(
            evaluate_all_lagrange_polynomials(12, Scalar::ONE, Scalar::ONE),
            Err(DomainError::DomainSizeNotPowerOfTwo { domain_size: 12 })
        );
        assert_eq!(
            evaluate_all_lagrange_polynomials(0, Scalar::ONE, Scalar::ONE),
            Err(DomainError::DomainSizeNotPowerOfTwo { domain_size: 0 })
        );
    }

    #[test]
    fn small_field_closed_form() {
        // m = 4 over Z/5 with ω = 2, at t = 0 (not a 4th root of unity):
        // Z(0) = -1, so L_i(0) = -ω^i / (4 * -ω^i) = 1/4 = 4 for every i.
        type F5 = Fp64<5>;
        let coefficients = evaluate_all_lagrange_polynomials(4, F5::new(2), F5::ZERO).unwrap();
        assert_eq!(coefficients, vec![F5::new(4); 4]);
    }

    proptest! {
        #[test]
        fn prop_lagrange_interpolates(
            coeffs in prop::collection::vec(any::<u64>().prop_map(Scalar::from), 16),
            t in any::<u64>().prop_map(Scalar::from),
        ) {
            // f(x) = sum coeffs[k] x^k, evaluated naively at the domain and at t.
            let m = coeffs.len();
            let omega = Scalar::root_of_unity(m).unwrap();
            let eval = |x: Scalar| coeffs.iter().rev().fold(Scalar::ZERO, |acc, c| acc * x + c);

            let coefficients = evaluate_all_lagrange_polynomials(m, omega, t).unwrap();

            let mut node = Scalar::ONE;
            let mut interpolated = Scalar::ZERO;
            for coefficient in coefficients {
                interpolated += coefficient * eval(node);
                node *= omega;
            }
            prop_assert_eq!(interpolated, eval(t));
        }
    }
}
