// src/integer_math/digits.rs

/// Number of decimal digits in `value`. Zero has one digit.
pub fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// 10^exponent. Panics on overflow, which only happens for exponents above 19.
pub fn pow10(exponent: u32) -> u64 {
    10u64.pow(exponent)
}

/// Reverses the decimal digits of `value`.
pub fn reverse_digits(mut value: u64) -> u128 {
    let mut reversed = 0u128;
    while value > 0 {
        reversed = reversed * 10 + (value % 10) as u128;
        value /= 10;
    }
    reversed
}

/// True when `value` reads the same forwards and backwards in base 10.
pub fn is_palindrome(value: u64) -> bool {
    reverse_digits(value) == value as u128
}
