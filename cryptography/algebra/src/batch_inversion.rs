use ff::Field;

/// Given a vector of field elements {v_i}, compute the vector {v_i^(-1)}
///
/// Zero elements have no inverse and are left as zero.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    let mut scratch_pad = Vec::with_capacity(v.len());
    batch_inverse_scratch_pad(v, &mut scratch_pad);
}

/// Given a vector of field elements {v_i}, compute the vector {v_i^(-1)}
///
/// A scratchpad is used to avoid excessive allocations in the case that this method is
/// called repeatedly.
///
/// Zero elements have no inverse and are left as zero.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = v.len())))]
pub fn batch_inverse_scratch_pad<F: Field>(v: &mut [F], scratchpad: &mut Vec<F>) {
    // Montgomery's Trick and Fast Implementation of Masked AES
    // Genelle, Prouff and Quisquater
    // Section 3.2

    let n = v.len();
    if n == 0 {
        return;
    }

    scratchpad.clear();
    scratchpad.reserve(n);

    // First pass: compute [a, ab, abc, ...], skipping zeroes
    let mut tmp = F::ONE;
    for f in v.iter().filter(|f| !f.is_zero_vartime()) {
        tmp *= f;
        scratchpad.push(tmp);
    }

    // Invert `tmp`.
    tmp = tmp
        .invert()
        .expect("guaranteed to be non-zero since we filtered out zero field elements");

    // Second pass: iterate backwards to compute inverses
    for (f, s) in v
        .iter_mut()
        .rev()
        .filter(|f| !f.is_zero_vartime())
        // Backwards, skip last element, fill in one for last term.
        .zip(scratchpad.iter().rev().skip(1).chain(Some(&F::ONE)))
    {
        // tmp := tmp * f; f := tmp * s = 1/f
        let new_tmp = tmp * *f;
        *f = tmp * *s;
        tmp = new_tmp;
    }
}
