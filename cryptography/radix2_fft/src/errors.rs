/// Errors that can occur when setting up or using a radix-2 evaluation domain.
///
/// Only conditions that are cheap to detect are reported. Whether the supplied
/// root of unity really is primitive is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Raised when the size of the vector (or the requested domain) is not a power of two.
    ///
    /// Zero is not a power of two, so empty inputs are rejected as well.
    DomainSizeNotPowerOfTwo {
        /// The offending size.
        domain_size: usize,
    },

    /// Raised when the domain size is a multiple of the field characteristic,
    /// so `1/m` does not exist.
    ///
    /// A primitive root of unity of such an order cannot exist either.
    DomainSizeNotInvertible {
        /// The offending size.
        domain_size: usize,
    },

    /// Raised when the field does not contain a root of unity of the requested order.
    DomainSizeTooLarge {
        /// The requested size.
        domain_size: usize,
        /// `2^s`, where `s` is the 2-adicity of the field.
        max_domain_size: u64,
    },

    /// Raised when more values are supplied than there are points in the domain.
    TooManyValues {
        /// Number of values supplied.
        num_values: usize,
        /// Number of points in the domain.
        domain_size: usize,
    },

    /// Raised when a polynomial is too short to have the vanishing polynomial added to it.
    ///
    /// Adding `c * (x^m - 1)` needs at least `m + 1` coefficients.
    PolynomialTooShort {
        /// Number of coefficients supplied.
        num_coefficients: usize,
        /// Minimum number of coefficients (`m + 1`).
        min_num_coefficients: usize,
    },

    /// Raised when a coset is created with a zero generator.
    CosetGeneratorIsZero,

    /// Raised when dividing by the vanishing polynomial on a coset `g·S` with
    /// `g^m = 1`. That coset is the domain itself, where the vanishing polynomial is zero.
    CosetIsDomain,
}

/// Checks the one precondition which is cheap to verify: `domain_size` is a power of two.
pub(crate) const fn check_domain_size(domain_size: usize) -> Result<(), DomainError> {
    if domain_size.is_power_of_two() {
        Ok(())
    } else {
        Err(DomainError::DomainSizeNotPowerOfTwo { domain_size })
    }
}
