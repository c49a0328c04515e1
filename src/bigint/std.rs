use num_bigint::BigInt;
use num_traits::{Bounded, One, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigIntImpl;
use crate::ubigint::{UBigIntImpl, UInt};

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl<U: UInt> From<$t> for BigIntImpl<U> {
                fn from(v: $t) -> Self {
                    Self::from_i64(v as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);

impl<H: UInt> From<i128> for BigIntImpl<UBigIntImpl<H>> {
    fn from(v: i128) -> Self {
        Self::from_i128(v)
    }
}

impl<U: UInt> From<BigIntImpl<U>> for BigInt {
    fn from(v: BigIntImpl<U>) -> Self {
        v.to_bigint()
    }
}

impl<U: UInt> Zero for BigIntImpl<U> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<U: UInt> One for BigIntImpl<U> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<U: UInt> Bounded for BigIntImpl<U> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<U: UInt> WrappingAdd for BigIntImpl<U> {
    fn wrapping_add(&self, v: &Self) -> Self {
        *self + *v
    }
}

impl<U: UInt> WrappingSub for BigIntImpl<U> {
    fn wrapping_sub(&self, v: &Self) -> Self {
        *self - *v
    }
}

impl<U: UInt> WrappingMul for BigIntImpl<U> {
    fn wrapping_mul(&self, v: &Self) -> Self {
        *self * *v
    }
}

impl<U: UInt> WrappingNeg for BigIntImpl<U> {
    fn wrapping_neg(&self) -> Self {
        -*self
    }
}

/// Serialized as a signed decimal string
impl<U: UInt> Serialize for BigIntImpl<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, U: UInt> Deserialize<'de> for BigIntImpl<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
