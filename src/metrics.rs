//! Bit-valued information quantities.

/// Information in bits of an outcome with probability `p`.
///
/// Impossible outcomes (`p <= 0`) carry 0 bits rather than infinity.
pub fn information(p: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    -p.log2()
}

/// Contribution of an outcome with probability `p` to the entropy sum.
pub fn expected_information(p: f64) -> f64 {
    p * information(p)
}

/// Pool size expected to survive a probe with the given entropy.
pub fn expected_remaining(pool_size: usize, entropy: f64) -> f64 {
    pool_size as f64 / 2_f64.powf(entropy)
}
