// src/integer_math/primality.rs
//
// Primality tests used on palindromic candidates that survived trial division.
//
// The default test is Fermat's Little Theorem with the single base 2:
//
//     n is reported prime  <=>  2^(n-1) ≡ 1 (mod n)
//
// This is necessary but not sufficient. Base-2 pseudoprimes (341, 561, 645,
// 1105, ...) are reported prime. In the search pipeline every candidate has
// already been divided by the filter criteria, which removes every liar with
// a prime factor below the filter bound; composites whose smallest factor
// exceeds that bound can still slip through for large ranges. That accuracy
// bound is accepted. `MillerRabin` is deterministic over all of u64 and is
// only used when explicitly selected through configuration.

use std::fmt;

use log::trace;
use num::Integer;
use serde::{Deserialize, Serialize};

use crate::integer_math::mod_pow::{mod_pow, mul_mod};

/// A primality predicate over `u64`.
pub trait PrimalityTest {
    fn is_prime(&self, number: u64) -> bool;

    fn name(&self) -> &'static str;
}

/// Fermat test with base 2.
///
/// Note that 2 itself is rejected: 2^1 mod 2 is 0. The search pipeline never
/// asks about 2 because it is recovered from the filter criteria instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FermatBase2;

impl PrimalityTest for FermatBase2 {
    fn is_prime(&self, number: u64) -> bool {
        is_prime(number)
    }

    fn name(&self) -> &'static str {
        "Fermat (base 2)"
    }
}

/// Deterministic Miller-Rabin for every `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MillerRabin;

impl MillerRabin {
    // Sufficient witnesses for n < 3.3 * 10^24
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
}

impl PrimalityTest for MillerRabin {
    fn is_prime(&self, number: u64) -> bool {
        if number < 2 {
            return false;
        }
        for &witness in &Self::WITNESSES {
            if number == witness {
                return true;
            }
            if number % witness == 0 {
                return false;
            }
        }

        let mut d = number - 1;
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        'witness: for &witness in &Self::WITNESSES {
            let mut x = mod_pow(witness, d, number);
            if x == 1 || x == number - 1 {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, number);
                if x == number - 1 {
                    continue 'witness;
                }
            }
            trace!("Miller-Rabin: {} is composite (witness {})", number, witness);
            return false;
        }
        true
    }

    fn name(&self) -> &'static str {
        "Miller-Rabin (deterministic u64)"
    }
}

/// Fermat base-2 test: true iff `2^(number-1) mod number == 1`.
///
/// Inputs below 2 are reported composite.
pub fn is_prime(number: u64) -> bool {
    if number < 2 {
        return false;
    }
    mod_pow(2, number - 1, number) == 1
}

/// Selects the primality test applied to surviving candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimalityMode {
    #[default]
    Fermat,
    MillerRabin,
}

impl PrimalityMode {
    pub fn tester(&self) -> Box<dyn PrimalityTest> {
        match self {
            PrimalityMode::Fermat => Box::new(FermatBase2),
            PrimalityMode::MillerRabin => Box::new(MillerRabin),
        }
    }
}

impl fmt::Display for PrimalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tester().name())
    }
}
