// src/integer_math/mod_pow.rs

use num::Integer;

/// Computes `base^exponent mod modulus` by repeated squaring.
///
/// Products are widened to `u128` before reduction, so any `u64` modulus is
/// safe. A modulus of 1 yields 0, matching `x mod 1 == 0` for every `x`.
///
/// # Examples
/// ```
/// use palprimes::integer_math::mod_pow::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(2, 340, 341), 1);
/// ```
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut square = base % modulus;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining.is_odd() {
            result = mul_mod(result, square, modulus);
        }
        square = mul_mod(square, square, modulus);
        remaining >>= 1;
    }

    result
}

/// `(left * right) mod modulus` without overflow.
pub fn mul_mod(left: u64, right: u64, modulus: u64) -> u64 {
    ((left as u128 * right as u128) % modulus as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow_small_values() {
        assert_eq!(mod_pow(3, 4, 5), 1); // 81 mod 5
        assert_eq!(mod_pow(2, 0, 7), 1);
        assert_eq!(mod_pow(0, 5, 7), 0);
        assert_eq!(mod_pow(10, 3, 7), 6); // 1000 = 142*7 + 6
    }

    #[test]
    fn test_mod_pow_modulus_one() {
        assert_eq!(mod_pow(2, 0, 1), 0);
        assert_eq!(mod_pow(5, 9, 1), 0);
    }

    #[test]
    fn test_mod_pow_matches_naive_product() {
        for modulus in 2u64..60 {
            for base in 0u64..12 {
                let mut expected = 1 % modulus;
                for exponent in 0u64..20 {
                    assert_eq!(mod_pow(base, exponent, modulus), expected,
                        "{}^{} mod {}", base, exponent, modulus);
                    expected = expected * base % modulus;
                }
            }
        }
    }

    #[test]
    fn test_mod_pow_large_modulus_does_not_overflow() {
        // 2^64 - 59 is the largest prime below 2^64
        let p = u64::MAX - 58;
        assert_eq!(mod_pow(2, p - 1, p), 1);
        assert_eq!(mul_mod(u64::MAX - 1, u64::MAX - 1, u64::MAX), 1);
    }
}
