//! Utilities to generate prime numbers.

use crate::Rng;

/// The first few prime numbers, used to cheaply reject most composites before
/// running the Miller-Rabin rounds.
const FIRST_PRIMES: [u64; 64] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311,
];

/// Computes `a * b (mod m)`.
#[inline]
fn mulmod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Computes `base ^ e (mod m)` by binary exponentiation.
fn expmod(base: u64, mut e: u64, m: u64) -> u64 {
    let mut result = 1;
    let mut base = base % m;
    while e > 0 {
        if e % 2 == 1 {
            result = mulmod(result, base, m);
        }

        e >>= 1;
        base = mulmod(base, base, m);
    }
    result
}

/// Returns whether `n` is likely to be a prime number.
///
/// The answer is probabilistic (Miller-Rabin), but the error rate is far below
/// anything that matters for hashing purposes.
pub fn is_prime(n: u64, rng: &mut impl Rng) -> bool {
    for &p in FIRST_PRIMES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }

    /// The number of Miller-Rabin rounds to perform.
    const ITERATIONS: usize = 10;

    let mut max_divisions_by_two = 0;
    let mut even_component = n - 1;

    while even_component % 2 == 0 {
        even_component /= 2;
        max_divisions_by_two += 1;
    }

    let trial_composite = move |round_tester: u64| {
        if expmod(round_tester, even_component, n) == 1 {
            return false;
        }

        for i in 0..max_divisions_by_two {
            if expmod(round_tester, (1 << i) * even_component, n) == n - 1 {
                return false;
            }
        }

        true
    };

    for _ in 0..ITERATIONS {
        let round_tester = rng.next_u64() % (n - 2) + 2;
        if trial_composite(round_tester) {
            return false;
        }
    }

    true
}

/// Generates a random number that is likely to be prime.
pub fn generate_prime(rng: &mut impl Rng) -> u64 {
    loop {
        let n = rng.next_u64();

        if is_prime(n, rng) {
            return n;
        }
    }
}
