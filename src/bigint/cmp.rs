use core::cmp::Ordering;

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

impl<U: UInt> Ord for BigIntImpl<U> {
    /// Flipping the sign bit maps the signed order onto the unsigned one
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0 ^ U::SIGN_BIT).cmp(&(other.0 ^ U::SIGN_BIT))
    }
}

impl<U: UInt> PartialOrd for BigIntImpl<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{I128, I512};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_cmp_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i128 = prng.gen();
            assert_eq!(I128::from_i128(a).cmp(&I128::from_i128(b)), a.cmp(&b));
        }
        assert!(I128::MIN < I128::MINUS_ONE);
        assert!(I128::MINUS_ONE < I128::ZERO);
        assert!(I128::ZERO < I128::MAX);
    }

    #[test]
    fn test_cmp() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(511));
            let b: BigInt = prng.sample(RandomBits::new(511));
            assert_eq!(I512::from_bigint(&a).cmp(&I512::from_bigint(&b)), a.cmp(&b));
        }
    }
}
