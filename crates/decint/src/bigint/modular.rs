use num_traits::{One, Zero};

use crate::error::ArithmeticError;

use super::BigInt;

impl BigInt {
    /// `(self + other) % modulus`.
    pub fn mod_add(&self, other: &BigInt, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
        let (_, remainder) = (self + other).div_rem(modulus)?;
        Ok(remainder)
    }

    /// `(self * other) % modulus`.
    pub fn mod_mul(&self, other: &BigInt, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
        let (_, remainder) = (self * other).div_rem(modulus)?;
        Ok(remainder)
    }

    /// Modular multiplicative inverse by the extended Euclidean algorithm:
    /// the `x` in `[0, modulus)` with `(self * x) % modulus == 1`.
    ///
    /// A modulus of one has the conventional inverse zero. When the Euclidean
    /// chain terminates with a gcd other than one (which includes operands
    /// outside `1..modulus` that never certify a unit gcd), there is no
    /// inverse and `NoInverse` is returned rather than a meaningless
    /// coefficient.
    pub fn mod_inverse(&self, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
        if modulus.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        let one = BigInt::one();
        let mut a = self.clone();
        let mut m = modulus.clone();
        let mut x0 = BigInt::zero();
        let mut x1 = BigInt::one();

        while a > one && !m.is_zero() {
            let (q, r) = a.div_rem(&m)?;
            a = std::mem::replace(&mut m, r);
            let next = &x1 - &(&q * &x0);
            x1 = std::mem::replace(&mut x0, next);
        }

        // The loop leaves gcd(self, modulus) in `a`.
        if !a.is_one() {
            return Err(ArithmeticError::NoInverse);
        }

        if x1.negative {
            x1 = &x1 + modulus;
        }
        Ok(x1)
    }
}
