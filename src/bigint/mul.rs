use core::ops::{Mul, MulAssign};

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

/// The low half of a product is the same for signed and unsigned operands.
impl<U: UInt> Mul for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl<U: UInt> MulAssign for BigIntImpl<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{I1024, I128};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_mul_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i128 = prng.gen::<i128>() >> prng.gen_range(0..128);
            assert_eq!((I128::from_i128(a) * I128::from_i128(b)).as_i128(), a.wrapping_mul(b));
        }
        assert_eq!(I128::MIN * I128::MINUS_ONE, I128::MIN);
    }

    #[test]
    fn test_mul() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..50 {
            let a: BigInt = prng.sample(RandomBits::new(511));
            let b: BigInt = prng.sample(RandomBits::new(511));
            let mut c = I1024::from_bigint(&a);
            c *= I1024::from_bigint(&b);
            assert_eq!(c.to_bigint(), a * b);
        }
    }
}
