use num_bigint::BigInt;
use num_traits::Zero;
use rand::Rng;

use super::polynomial::Polynomial;

/// Generate a random polynomial of the given degree using [`rand::rng()`].
///
/// All coefficients lie in the range `[-bound, bound]`. The leading coefficient
/// is never zero, unless `bound` is zero.
pub fn random_polynomial(degree: usize, bound: u64) -> Polynomial {
    let bound = i128::from(bound);
    let mut rng = rand::rng();
    let mut coefficients = (0..=degree)
        .map(|_| BigInt::from(rng.random_range(-bound..=bound)))
        .collect::<Vec<_>>();

    if bound > 0 {
        while coefficients[degree].is_zero() {
            coefficients[degree] = BigInt::from(rng.random_range(-bound..=bound));
        }
    }

    Polynomial::new(coefficients)
}

#[cfg(test)]
mod test_other {
    use num_traits::Signed;
    use test_strategy::proptest;

    use super::*;

    #[proptest(cases = 20)]
    fn random_polynomial_has_requested_degree(
        #[strategy(0usize..50)] degree: usize,
        #[strategy(1u64..1000)] bound: u64,
    ) {
        let polynomial = random_polynomial(degree, bound);
        proptest::prop_assert_eq!(degree, polynomial.degree());
    }

    #[test]
    fn random_polynomial_respects_bound() {
        let bound = 5;
        let polynomial = random_polynomial(100, bound);
        assert!(
            polynomial
                .coefficients()
                .iter()
                .all(|c| c.abs() <= BigInt::from(bound))
        );
    }

    #[test]
    fn random_polynomial_with_zero_bound_is_zero() {
        assert_eq!(0, random_polynomial(10, 0).degree());
    }
}
