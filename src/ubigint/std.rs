use num_bigint::BigUint;
use num_traits::{Bounded, One, WrappingAdd, WrappingMul, WrappingSub, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ubigint::{UBigIntImpl, UInt, U64};

/// Round to nearest from the top 64 significant bits, folding the rest into a
/// sticky bit, then scale by the dropped power of two.
pub(crate) fn to_f64<T: UInt>(v: T) -> f64 {
    let len = T::BITS - v.clz();
    if len <= 64 {
        return v.as_u64() as f64;
    }

    let shift = len - 64;
    let mut top = (v >> shift).as_u64();
    if v.trailing_zeros() < shift {
        top |= 1;
    }

    let mut f = top as f64;
    let mut rest = shift as i32;
    while rest > 0 && f.is_finite() {
        let k = rest.min(1000);
        f *= 2f64.powi(k);
        rest -= k;
    }
    f
}

/// Truncate toward zero, saturating at both ends like an `as` cast.
pub(crate) fn from_f64<T: UInt>(v: f64) -> T {
    if v.is_nan() || v < 1.0 {
        return T::ZERO;
    }
    if v.is_infinite() {
        return T::MAX;
    }

    let bits = v.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);

    if exp < 0 {
        // v >= 1, so at most 52 fraction bits are dropped
        T::from_u64(mantissa >> (-exp) as u32)
    } else if 53 + exp as u32 > T::BITS {
        T::MAX
    } else {
        T::from_u64(mantissa) << exp as u32
    }
}

pub(crate) fn to_le_bytes<T: UInt>(v: T) -> Vec<u8> {
    (0..T::WORDS).flat_map(|i| v.word(i).to_le_bytes()).collect()
}

pub(crate) fn to_be_bytes<T: UInt>(v: T) -> Vec<u8> {
    let mut bytes = to_le_bytes(v);
    bytes.reverse();
    bytes
}

/// Missing high bytes are zero, bytes beyond the width are dropped
pub(crate) fn from_le_bytes<T: UInt>(bytes: &[u8]) -> T {
    let mut out = T::ZERO;
    for (i, chunk) in bytes.chunks(8).take(T::WORDS).enumerate() {
        let mut word = [0u8; 8];
        word[..chunk.len()].copy_from_slice(chunk);
        out.set_word(i, u64::from_le_bytes(word));
    }
    out
}

pub(crate) fn from_be_bytes<T: UInt>(bytes: &[u8]) -> T {
    let le: Vec<u8> = bytes.iter().rev().copied().collect();
    from_le_bytes(&le)
}

/// Big-endian hex digits, with or without a `0x` or `0X` prefix
pub(crate) fn from_hex<T: UInt>(s: &str) -> Result<T, hex::FromHexError> {
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    let bytes = if s.len() % 2 == 1 {
        hex::decode(format!("0{s}"))?
    } else {
        hex::decode(s)?
    };
    Ok(from_be_bytes(&bytes))
}

/// Reduced modulo `2^BITS`
pub(crate) fn from_biguint<T: UInt>(v: &BigUint) -> T {
    from_le_bytes(&v.to_bytes_le())
}

macro_rules! impl_ambient_traits {
    ($ty:ty $(, $h:ident)?) => {
        impl$(<$h: UInt>)? Zero for $ty {
            fn zero() -> Self {
                <Self as UInt>::ZERO
            }

            fn is_zero(&self) -> bool {
                UInt::is_zero(*self)
            }
        }

        impl$(<$h: UInt>)? One for $ty {
            fn one() -> Self {
                <Self as UInt>::ONE
            }
        }

        impl$(<$h: UInt>)? Bounded for $ty {
            fn min_value() -> Self {
                <Self as UInt>::ZERO
            }

            fn max_value() -> Self {
                <Self as UInt>::MAX
            }
        }

        impl$(<$h: UInt>)? WrappingAdd for $ty {
            fn wrapping_add(&self, v: &Self) -> Self {
                *self + *v
            }
        }

        impl$(<$h: UInt>)? WrappingSub for $ty {
            fn wrapping_sub(&self, v: &Self) -> Self {
                *self - *v
            }
        }

        impl$(<$h: UInt>)? WrappingMul for $ty {
            fn wrapping_mul(&self, v: &Self) -> Self {
                *self * *v
            }
        }

        impl$(<$h: UInt>)? From<$ty> for BigUint {
            fn from(v: $ty) -> Self {
                v.to_biguint()
            }
        }

        impl$(<$h: UInt>)? From<u8> for $ty {
            fn from(v: u8) -> Self {
                <Self as UInt>::from_u64(v as u64)
            }
        }

        impl$(<$h: UInt>)? From<u16> for $ty {
            fn from(v: u16) -> Self {
                <Self as UInt>::from_u64(v as u64)
            }
        }

        impl$(<$h: UInt>)? From<u32> for $ty {
            fn from(v: u32) -> Self {
                <Self as UInt>::from_u64(v as u64)
            }
        }

        /// Serialized as a `0x` prefixed hex string
        impl$(<$h: UInt>)? Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&format!("{:#x}", self))
            }
        }

        impl<'de $(, $h: UInt)?> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_ambient_traits!(U64);
impl_ambient_traits!(UBigIntImpl<H>, H);

impl<H: UInt> From<u64> for UBigIntImpl<H> {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl<H: UInt> From<u128> for UBigIntImpl<H> {
    fn from(v: u128) -> Self {
        Self::from_u128(v)
    }
}

#[cfg(test)]
mod test {
    use crate::ubigint::{UInt, U1024, U128, U256, U4096, U64};
    use core::ops::{Shl, Sub};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::{Bounded, One, WrappingSub, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_to_f64_u128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: u128 = prng.gen::<u128>() >> prng.gen_range(0..128);
            assert_eq!(U128::from_u128(a).to_f64(), a as f64);
        }
        // halfway cases: ties to even, and a sticky bit breaking the tie
        let tie = (1u128 << 100) | (1u128 << 47);
        assert_eq!(U128::from_u128(tie).to_f64(), tie as f64);
        assert_eq!(U128::from_u128(tie | 1).to_f64(), (tie | 1) as f64);
        assert_eq!(U128::MAX.to_f64(), u128::MAX as f64);
    }

    #[test]
    fn test_to_f64_wide() {
        assert_eq!((U1024::ONE << 1000).to_f64(), 2f64.powi(1000));
        assert_eq!(U4096::MAX.to_f64(), f64::INFINITY);
        assert_eq!(U256::MAX.to_f64(), 2f64.powi(256));
    }

    #[test]
    fn test_from_f64_u128() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..1000 {
            let f: f64 = prng.gen::<f64>() * 2f64.powi(prng.gen_range(0..140));
            assert_eq!(U128::from_f64(f).as_u128(), f as u128);
        }
        for f in [f64::NAN, -1.0, 0.5, f64::INFINITY, f64::NEG_INFINITY, 1e39, 1.0] {
            assert_eq!(U128::from_f64(f).as_u128(), f as u128);
        }
        assert_eq!(U4096::from_f64(f64::INFINITY), U4096::MAX);
        assert_eq!(U4096::from_f64(2f64.powi(1000)), U4096::ONE << 1000);
    }

    #[test]
    fn test_bytes() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let x = U256::from_biguint(&a);

            let mut le = a.to_bytes_le();
            le.resize(32, 0);
            assert_eq!(x.to_le_bytes(), le);
            assert_eq!(U256::from_le_bytes(&le), x);

            let be = x.to_be_bytes();
            assert_eq!(U256::from_be_bytes(&be), x);
            assert_eq!(U256::from_hex(&x.to_hex()).unwrap(), x);
        }

        // short input is zero-extended, long input truncated
        assert_eq!(U256::from_le_bytes(&[1, 2]), U256::from_u64(0x0201));
        assert_eq!(U128::from_le_bytes(&[0xff; 20]), U128::MAX);
        assert_eq!(U128::from_hex("0xabc").unwrap(), U128::from_u64(0xabc));
        assert_eq!(U128::from_hex("0XABC").unwrap(), U128::from_u64(0xabc));
        assert_eq!(U256::from_hex("0X1").unwrap(), U256::ONE);
        assert!(U128::from_hex("xyz").is_err());
    }

    #[test]
    fn test_biguint_reduces() {
        let big = BigUint::one().shl(300u32).sub(BigUint::one());
        assert_eq!(U256::from_biguint(&big), U256::MAX);
        assert_eq!(BigUint::from(U256::MAX), BigUint::one().shl(256u32).sub(BigUint::one()));
    }

    #[test]
    fn test_num_traits() {
        assert!(<U256 as Zero>::zero().is_zero());
        assert_eq!(<U256 as One>::one(), U256::ONE);
        assert_eq!(<U64 as Bounded>::max_value(), U64::MAX);
        assert_eq!(WrappingSub::wrapping_sub(&U256::ZERO, &U256::ONE), U256::MAX);
        assert_eq!(U256::from(7u8), U256::from_u64(7));
        assert_eq!(U256::from(u128::MAX).as_u128(), u128::MAX);
    }

    #[test]
    fn test_serde() {
        let x = U256::from_u64(0xdead_beef) << 100;
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"0xdeadbeef0000000000000000000000000\"");
        assert_eq!(serde_json::from_str::<U256>(&json).unwrap(), x);
        assert_eq!(serde_json::from_str::<U64>("\"1234\"").unwrap(), U64::new(1234));
        assert!(serde_json::from_str::<U64>("\"12x\"").is_err());
    }
}
