//! Signed fixed-width integers, a two's complement view of the unsigned types.

use num_bigint::{BigInt, Sign};

use crate::ubigint::{UInt, U1024, U128, U2048, U256, U4096, U512, U64};

mod add;
mod bits;
mod cmp;
mod div;
mod mul;
mod std;
mod sub;

/// Two's complement integer stored in the unsigned `U`; the top bit is the sign.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BigIntImpl<U>(pub(crate) U);

pub type I64 = BigIntImpl<U64>;
pub type I128 = BigIntImpl<U128>;
pub type I256 = BigIntImpl<U256>;
pub type I512 = BigIntImpl<U512>;
pub type I1024 = BigIntImpl<U1024>;
pub type I2048 = BigIntImpl<U2048>;
pub type I4096 = BigIntImpl<U4096>;

impl<U: UInt> BigIntImpl<U> {
    pub const BITS: u32 = U::BITS;
    pub const ZERO: Self = Self(U::ZERO);
    pub const ONE: Self = Self(U::ONE);
    pub const MINUS_ONE: Self = Self(U::MAX);
    pub const MIN: Self = Self(U::SIGN_BIT);
    pub const MAX: Self = Self(U::SIGNED_MAX);

    pub const fn from_bits(bits: U) -> Self {
        Self(bits)
    }

    /// The raw two's complement bits
    pub fn to_bits(self) -> U {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.bit(U::BITS - 1)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Magnitude as an unsigned value; `MIN` maps to `2^(BITS - 1)`
    pub fn unsigned_abs(self) -> U {
        if self.is_negative() {
            self.0.wrapping_neg()
        } else {
            self.0
        }
    }

    /// Wraps at `MIN` like `i128::wrapping_abs`
    pub fn abs(self) -> Self {
        Self(self.unsigned_abs())
    }

    pub fn signum(self) -> Self {
        if self.is_negative() {
            Self::MINUS_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    pub fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Sign extended, or truncated to `BITS`
    pub fn from_i64(v: i64) -> Self {
        let mut bits = if v < 0 { U::MAX } else { U::ZERO };
        bits.set_word(0, v as u64);
        Self(bits)
    }

    pub fn from_i128(v: i128) -> Self {
        let mut bits = if v < 0 { U::MAX } else { U::ZERO };
        bits.set_word(0, v as u64);
        if U::WORDS > 1 {
            bits.set_word(1, (v >> 64) as u64);
        }
        Self(bits)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0.word(0) as i64
    }

    pub fn as_i128(self) -> i128 {
        if U::WORDS == 1 {
            self.as_i64() as i128
        } else {
            self.0.as_u128() as i128
        }
    }

    /// Sign-extend or truncate into another width
    pub fn resize<V: UInt>(self) -> BigIntImpl<V> {
        let mut bits = if self.is_negative() { V::MAX } else { V::ZERO };
        for i in 0..V::WORDS.min(U::WORDS) {
            bits.set_word(i, self.0.word(i));
        }
        BigIntImpl(bits)
    }

    pub fn to_f64(self) -> f64 {
        if self.is_negative() {
            -self.unsigned_abs().to_f64()
        } else {
            self.0.to_f64()
        }
    }

    /// Truncate toward zero, saturating at `MIN` and `MAX`; NaN gives zero
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            return Self::ZERO;
        }
        if v >= 0.0 {
            let mag = U::from_f64(v);
            if mag > U::SIGNED_MAX {
                Self::MAX
            } else {
                Self(mag)
            }
        } else {
            let mag = U::from_f64(-v);
            if mag > U::SIGN_BIT {
                Self::MIN
            } else {
                Self(mag.wrapping_neg())
            }
        }
    }

    pub fn to_bigint(self) -> BigInt {
        let mag = self.unsigned_abs().to_biguint();
        if self.is_negative() {
            BigInt::from_biguint(Sign::Minus, mag)
        } else {
            BigInt::from_biguint(Sign::Plus, mag)
        }
    }

    /// Reduced modulo `2^BITS`
    pub fn from_bigint(v: &BigInt) -> Self {
        let mag = U::from_biguint(v.magnitude());
        if v.sign() == Sign::Minus {
            Self(mag.wrapping_neg())
        } else {
            Self(mag)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{I1024, I128, I256, I64};
    use crate::ubigint::{UInt, U128, U64};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_constants() {
        assert_eq!(I128::MIN.as_i128(), i128::MIN);
        assert_eq!(I128::MAX.as_i128(), i128::MAX);
        assert_eq!(I128::MINUS_ONE.as_i128(), -1);
        assert_eq!(I64::MIN.as_i64(), i64::MIN);
        assert_eq!(I64::MAX.as_i64(), i64::MAX);
        assert!(I256::MIN.is_negative());
        assert!(!I256::MAX.is_negative());
    }

    #[test]
    fn test_abs_signum() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let x = I128::from_i128(a);
            assert_eq!(x.unsigned_abs().as_u128(), a.unsigned_abs());
            assert_eq!(x.abs().as_i128(), a.wrapping_abs());
            assert_eq!(x.signum().as_i128(), a.signum());
            assert_eq!(x.is_negative(), a < 0);
        }
        assert_eq!(I128::MIN.abs(), I128::MIN);
        assert_eq!(I128::ZERO.signum(), I128::ZERO);
    }

    #[test]
    fn test_native_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i64 = prng.gen();
            assert_eq!(I128::from_i128(a).as_i128(), a);
            assert_eq!(I256::from_i128(a).as_i128(), a);
            assert_eq!(I1024::from_i64(b).as_i64(), b);
            assert_eq!(I128::from_i64(b).as_i128(), b as i128);
            assert_eq!(I64::from_i128(a).as_i64(), a as i64);
            assert_eq!(I64::from_i64(b).as_i128(), b as i128);
        }
    }

    #[test]
    fn test_resize() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let x = I128::from_i128(a);
            let wide: I1024 = x.resize();
            assert_eq!(wide.to_bigint(), BigInt::from(a));
            assert_eq!(wide.resize::<U128>(), x);
            assert_eq!(x.resize::<U64>().as_i64(), a as i64);
        }
    }

    #[test]
    fn test_f64() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);

        for _ in 0..1000 {
            let a: i128 = prng.gen::<i128>() >> prng.gen_range(0..128);
            assert_eq!(I128::from_i128(a).to_f64(), a as f64);

            let f: f64 = (prng.gen::<f64>() - 0.5) * 2f64.powi(prng.gen_range(0..130));
            assert_eq!(I128::from_f64(f).as_i128(), f as i128);
        }
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1e40, 1e40, -0.5, -1.0] {
            assert_eq!(I128::from_f64(f).as_i128(), f as i128);
        }
        assert_eq!(I128::MIN.to_f64(), i128::MIN as f64);
    }

    #[test]
    fn test_bigint() {
        let mut prng = ChaCha20Rng::seed_from_u64(4);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(255));
            assert_eq!(I256::from_bigint(&a).to_bigint(), a);
        }
        assert_eq!(I256::from_bigint(&BigInt::from(-1)), I256::MINUS_ONE);
    }
}
