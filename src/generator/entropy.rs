//! Entropy estimation

/// Bits of entropy of a password drawn uniformly and independently
/// from an alphabet of `alphabet_size` characters.
///
/// Returns `0.0` when the alphabet has at most one character or the
/// password is empty.
pub fn entropy_bits(password_length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size <= 1 || password_length == 0 {
        return 0.0;
    }
    password_length as f64 * (alphabet_size as f64).log2()
}
