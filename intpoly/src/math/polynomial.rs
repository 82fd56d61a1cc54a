use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use itertools::EitherOrBoth;
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use crate::config;

impl Zero for Polynomial {
    fn zero() -> Self {
        Self {
            coefficients: vec![BigInt::zero()],
        }
    }

    fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].is_zero()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self {
            coefficients: vec![BigInt::one()],
        }
    }

    fn is_one(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].is_one()
    }
}

/// A univariate polynomial with arbitrary-precision integer coefficients, in
/// monomial form.
///
/// The coefficient vector is kept normalized: it never carries trailing zeros,
/// except that the zero polynomial is represented by the single coefficient
/// `0`. Consequently, `coefficients().len() == degree() + 1` always holds, and
/// equality is plain structural equality.
///
/// Every operation returns a new polynomial and leaves its inputs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<BigInt>", into = "Vec<BigInt>")]
pub struct Polynomial {
    /// The polynomial's coefficients, in order of increasing degree. That is, the polynomial's
    /// leading coefficient is the last element of the vector.
    coefficients: Vec<BigInt>,
}

// Not derived: the generated coefficients have to be normalized.
impl<'a> Arbitrary<'a> for Polynomial {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let coefficients: Vec<i64> = u.arbitrary()?;
        Ok(Self::from(coefficients))
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let coefficients = &self.coefficients;
        let degree = self.degree();
        match degree {
            0 => return write!(f, "{}", coefficients[0]),
            1 => return write!(f, "{}x + {}", coefficients[1], coefficients[0]),
            _ => write!(f, "{}x^{degree}", coefficients[degree])?,
        }

        for pow in (0..degree).rev() {
            let coeff = &coefficients[pow];
            if coeff.is_zero() {
                continue;
            }

            if coeff.is_negative() {
                write!(f, " - {}", coeff.abs())?;
            } else {
                write!(f, " + {coeff}")?;
            }
            match pow {
                0 => (),
                1 => write!(f, "x")?,
                _ => write!(f, "x^{pow}")?,
            }
        }

        Ok(())
    }
}

impl<const N: usize, E> From<[E; N]> for Polynomial
where
    E: Into<BigInt>,
{
    fn from(coefficients: [E; N]) -> Self {
        Self::new(coefficients.into_iter().map(|c| c.into()).collect())
    }
}

impl<E> From<&[E]> for Polynomial
where
    E: Into<BigInt> + Clone,
{
    fn from(coefficients: &[E]) -> Self {
        Self::from(coefficients.to_vec())
    }
}

impl<E> From<Vec<E>> for Polynomial
where
    E: Into<BigInt>,
{
    fn from(coefficients: Vec<E>) -> Self {
        Self::new(coefficients.into_iter().map(|c| c.into()).collect())
    }
}

impl From<Polynomial> for Vec<BigInt> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl Polynomial {
    /// Create a polynomial from its coefficients, in order of increasing degree.
    ///
    /// Trailing zeros are removed. An empty vector gives the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intpoly::prelude::*;
    /// let p = Polynomial::new(vec![BigInt::from(1), BigInt::from(2), BigInt::from(0)]);
    /// assert_eq!(1, p.degree());
    /// assert_eq!("2x + 1", p.to_string());
    /// ```
    pub fn new(mut coefficients: Vec<BigInt>) -> Self {
        while coefficients.len() > 1 && coefficients.last().is_some_and(Zero::is_zero) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(BigInt::zero());
        }

        Self { coefficients }
    }

    /// The single-term polynomial `coefficient · x^exponent`.
    ///
    /// A zero `coefficient` gives the zero polynomial, independent of `exponent`.
    pub fn monomial(coefficient: impl Into<BigInt>, exponent: usize) -> Self {
        let coefficient = coefficient.into();
        if coefficient.is_zero() {
            return Self::zero();
        }

        let mut coefficients = vec![BigInt::zero(); exponent + 1];
        coefficients[exponent] = coefficient;
        Self::new(coefficients)
    }

    pub fn from_constant(constant: impl Into<BigInt>) -> Self {
        Self::new(vec![constant.into()])
    }

    /// The highest power with a non-zero coefficient, or 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficients, in order of increasing degree. Never empty, and the last
    /// element is non-zero unless the polynomial [is zero](Zero::is_zero).
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }

    /// The coefficient of the polynomial's term of highest power. `None` if (and only if) `self`
    /// [is zero](Zero::is_zero).
    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        if self.is_zero() {
            return None;
        }

        self.coefficients.last()
    }

    pub fn plus(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|a| match a {
                EitherOrBoth::Both(l, r) => l + r,
                EitherOrBoth::Left(l) => l.clone(),
                EitherOrBoth::Right(r) => r.clone(),
            })
            .collect();

        Self::new(coefficients)
    }

    pub fn minus(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|a| match a {
                EitherOrBoth::Both(l, r) => l - r,
                EitherOrBoth::Left(l) => l.clone(),
                EitherOrBoth::Right(r) => -r,
            })
            .collect();

        Self::new(coefficients)
    }

    /// Multiply two polynomials by full convolution. Takes time quadratic in the
    /// degrees.
    ///
    /// Products with at least [the configured number][cutoff] of coefficients are
    /// computed in parallel.
    ///
    /// [cutoff]: crate::config::set_parallel_multiplication_cutoff
    pub fn times(&self, other: &Self) -> Self {
        let product_len = self.degree() + other.degree() + 1;
        let cutoff = config::parallel_multiplication_cutoff();
        if product_len < cutoff {
            return self.naive_times(other);
        }

        tracing::trace!(product_len, cutoff, "multiplying polynomials in parallel");
        self.par_times(other)
    }

    /// Only `pub` to allow benchmarking; not considered part of the public API.
    #[doc(hidden)]
    pub fn naive_times(&self, other: &Self) -> Self {
        let mut product = vec![BigInt::zero(); self.degree() + other.degree() + 1];
        for (i, lhs) in self.coefficients.iter().enumerate() {
            for (j, rhs) in other.coefficients.iter().enumerate() {
                product[i + j] += lhs * rhs;
            }
        }

        Self::new(product)
    }

    /// Same convolution as [`naive_times`](Self::naive_times), but every
    /// coefficient of the product is computed independently on the
    /// [`rayon`] thread pool.
    ///
    /// Only `pub` to allow benchmarking; not considered part of the public API.
    #[doc(hidden)]
    pub fn par_times(&self, other: &Self) -> Self {
        let lhs = &self.coefficients;
        let rhs = &other.coefficients;
        let lhs_degree = self.degree();
        let rhs_degree = other.degree();

        let product = (0..=lhs_degree + rhs_degree)
            .into_par_iter()
            .map(|k| {
                let lowest = k.saturating_sub(rhs_degree);
                let highest = k.min(lhs_degree);
                (lowest..=highest)
                    .map(|i| &lhs[i] * &rhs[k - i])
                    .sum::<BigInt>()
            })
            .collect();

        Self::new(product)
    }

    /// Multiply every coefficient by `scalar`.
    #[must_use]
    pub fn scalar_mul(&self, scalar: impl Into<BigInt>) -> Self {
        let scalar = scalar.into();
        let coefficients = self.coefficients.iter().map(|c| c * &scalar).collect();
        Self::new(coefficients)
    }

    /// The composition `self(other(x))`, computed using Horner's method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intpoly::prelude::*;
    /// let p = Polynomial::from([1, 2, 3, 4]);
    /// let q = Polynomial::from([5, 0, 3]);
    /// assert_eq!("108x^6 + 567x^4 + 996x^2 + 586", p.compose(&q).to_string());
    /// ```
    pub fn compose(&self, other: &Self) -> Self {
        let mut acc = Self::zero();
        for c in self.coefficients.iter().rev() {
            let term = Self::from_constant(c.clone());
            acc = term.plus(&other.times(&acc));
        }

        acc
    }

    /// The formal derivative. The derivative of a constant polynomial is zero.
    pub fn differentiate(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, coefficient)| coefficient * BigInt::from(i))
            .collect();

        Self::new(coefficients)
    }

    /// Evaluate the polynomial in `x` using Horner's method. The result is exact.
    pub fn evaluate(&self, x: impl Into<BigInt>) -> BigInt {
        let x = x.into();
        let mut acc = BigInt::zero();
        for c in self.coefficients.iter().rev() {
            acc = c + &x * acc;
        }

        acc
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Polynomial {
        self.plus(other)
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(&rhs);
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Polynomial {
        self.minus(other)
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus(&rhs);
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.times(&other)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Polynomial {
        self.times(other)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let coefficients = self.coefficients.into_iter().map(|c| -c).collect();
        Self { coefficients }
    }
}
