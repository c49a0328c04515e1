use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

impl<U: UInt> BigIntImpl<U> {
    /// Truncating division: the quotient's sign is the xor of the operand
    /// signs and the remainder takes the dividend's sign. `MIN / -1` wraps.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        let (q, r) = self.unsigned_abs().div_rem(rhs.unsigned_abs());
        let (q, r) = (Self(q), Self(r));
        let q = if self.is_negative() != rhs.is_negative() { -q } else { q };
        let r = if self.is_negative() { -r } else { r };
        (q, r)
    }

    /// Wrapping power; the sign is negative when `self` is and `e` is odd
    pub fn pow(self, e: U) -> Self {
        let mag = Self(self.unsigned_abs().pow(e));
        if self.is_negative() && e.bit(0) {
            -mag
        } else {
            mag
        }
    }
}

impl<U: UInt> Div for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl<U: UInt> Rem for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl<U: UInt> DivAssign for BigIntImpl<U> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<U: UInt> RemAssign for BigIntImpl<U> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{I128, I512};
    use crate::ubigint::{UInt, U128};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_div_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i128 = prng.gen::<i128>() >> prng.gen_range(0..127);
            let b = if b == 0 { -1 } else { b };

            let (q, r) = I128::from_i128(a).div_rem(I128::from_i128(b));
            assert_eq!(q.as_i128(), a.wrapping_div(b));
            assert_eq!(r.as_i128(), a.wrapping_rem(b));
        }
    }

    #[test]
    fn test_div_signs() {
        let cases = [
            (7i128, 2i128),
            (-7, 2),
            (7, -2),
            (-7, -2),
            (0, -5),
            (i128::MIN, -1),
            (i128::MIN, 1),
            (i128::MAX, i128::MIN),
        ];
        for (a, b) in cases {
            let (x, y) = (I128::from_i128(a), I128::from_i128(b));
            assert_eq!((x / y).as_i128(), a.wrapping_div(b), "{a} / {b}");
            assert_eq!((x % y).as_i128(), a.wrapping_rem(b), "{a} % {b}");
        }
    }

    #[test]
    fn test_div() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(511));
            let b: BigInt = prng.sample(RandomBits::new(300));
            let b = if b == BigInt::from(0) { BigInt::from(3) } else { b };

            let mut q = I512::from_bigint(&a);
            q /= I512::from_bigint(&b);
            let mut r = I512::from_bigint(&a);
            r %= I512::from_bigint(&b);
            // BigInt division also truncates toward zero
            assert_eq!(q.to_bigint(), a.clone() / b.clone());
            assert_eq!(r.to_bigint(), a % b);
        }
    }

    #[test]
    fn test_pow() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..200 {
            let a: i128 = prng.gen::<i128>() >> prng.gen_range(0..127);
            let e: u32 = prng.gen_range(0..200);
            let p = I128::from_i128(a).pow(U128::from_u64(e as u64));
            assert_eq!(p.as_i128(), a.wrapping_pow(e));
        }
        assert_eq!(I128::from_i128(-3).pow(U128::from_u64(3)).as_i128(), -27);
        assert_eq!(I128::from_i128(-3).pow(U128::from_u64(4)).as_i128(), 81);
    }
}
