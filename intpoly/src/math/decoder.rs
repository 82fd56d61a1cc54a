//! Recover the coefficients of a polynomial with non-negative integer
//! coefficients from just two of its evaluations.
//!
//! If all coefficients of `p` are non-negative, then every coefficient is at
//! most `p(1)`, the sum of all coefficients. Hence, the coefficients of `p` are
//! precisely the digits of `p(N)` in base `N = p(1) + 1`.
//!
//! ```
//! # use intpoly::prelude::*;
//! // p(x) = x^2 + 4x + 2
//! let seed = BigUint::from(7_u32); // p(1)
//! let target = BigUint::from(98_u32); // p(8)
//! let p = recover_polynomial(&seed, &target);
//! assert_eq!("1x^2 + 4x + 2", p.to_string());
//! ```

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;

use super::polynomial::Polynomial;
use crate::error::ParseEvaluationError;

/// The base in which [`decode`] decomposes its target: `seed + 1`.
pub fn base(seed: &BigUint) -> BigUint {
    seed + BigUint::one()
}

/// The digits of `target` in base `seed + 1`, least-significant digit first.
///
/// Every digit lies in `[0, seed + 1)`. A `target` of zero has no digits, _i.e._,
/// the result is empty.
///
/// # Panics
///
/// Panics if `seed` is zero but `target` is not. Base 1 has only the digit 0,
/// so no non-zero number can be represented. (Such inputs cannot stem from a
/// polynomial with non-negative coefficients: `p(1) == 0` implies `p == 0`.)
///
/// # Examples
///
/// ```
/// # use intpoly::prelude::*;
/// let digits = decode(&BigUint::from(9_u32), &BigUint::from(142_u32));
/// let expected = [2_u32, 4, 1].map(BigUint::from);
/// assert_eq!(expected.to_vec(), digits);
/// ```
pub fn decode(seed: &BigUint, target: &BigUint) -> Vec<BigUint> {
    assert!(
        !seed.is_zero() || target.is_zero(),
        "cannot decode non-zero target in base 1"
    );

    let base = base(seed);
    tracing::debug!(%base, target_bits = target.bits(), "decoding target");

    let mut digits = vec![];
    let mut remaining = target.clone();
    while !remaining.is_zero() {
        let digit = &remaining % &base;
        remaining = (remaining - &digit) / &base;
        digits.push(digit);
    }

    tracing::trace!(num_digits = digits.len(), "decoded target");
    digits
}

/// The inverse of [`decode`]: interpret `digits` as coefficients, least
/// significant first, and evaluate the resulting polynomial in `seed + 1`.
pub fn encode(seed: &BigUint, digits: &[BigUint]) -> BigUint {
    let base = base(seed);
    let mut acc = BigUint::zero();
    for digit in digits.iter().rev() {
        acc = digit + &base * acc;
    }

    acc
}

/// The polynomial whose coefficients are the [digits](decode) of `target` in base
/// `seed + 1`.
///
/// If `seed` is `p(1)` and `target` is `p(seed + 1)` for some polynomial `p` with
/// non-negative coefficients, the result is `p`. A `target` of zero gives the
/// zero polynomial.
pub fn recover_polynomial(seed: &BigUint, target: &BigUint) -> Polynomial {
    let coefficients = decode(seed, target)
        .into_iter()
        .map(BigInt::from)
        .collect::<Vec<_>>();

    Polynomial::new(coefficients)
}

/// Parse a textual, non-negative integer as accepted by [`decode`]. Surrounding
/// whitespace is ignored. Apart from an optional leading sign, only the decimal
/// digits `0` through `9` are accepted; in particular, no `_` separators.
///
/// # Examples
///
/// ```
/// # use intpoly::prelude::*;
/// # use intpoly::math::decoder::parse_evaluation;
/// assert_eq!(BigUint::from(142_u32), parse_evaluation(" 142\n").unwrap());
/// assert!(parse_evaluation("-1").is_err());
/// ```
pub fn parse_evaluation(input: &str) -> Result<BigUint, ParseEvaluationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseEvaluationError::Empty);
    }

    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    if let Some(unexpected) = unsigned.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseEvaluationError::UnexpectedCharacter(unexpected));
    }

    let value: BigInt = input.parse().map_err(ParseEvaluationError::Invalid)?;
    value
        .to_biguint()
        .ok_or_else(|| ParseEvaluationError::Negative(input.to_string()))
}
