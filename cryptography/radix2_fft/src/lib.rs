mod coset;
mod domain;
mod errors;
mod fft;
mod lagrange;
mod parallel_fft;

// Re-export the algebra crate, so users can name the field and group types
// without depending on it directly.
pub use algebra;
pub use algebra::{FieldAlgebra, GroupAlgebra};

pub use coset::{multiply_by_coset, Coset};
pub use domain::Radix2Domain;
pub use errors::DomainError;
pub use fft::{reverse_bit_order, serial_radix2_fft};
pub use lagrange::evaluate_all_lagrange_polynomials;
pub use parallel_fft::parallel_radix2_fft;
