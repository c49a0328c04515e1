//! Radix conversion and the `core::fmt` surface.

use core::fmt;

use crate::bigint::BigIntImpl;
use crate::ubigint::{UBigIntImpl, UInt, U64};

pub mod format;
pub mod parse;

pub use format::{format_int, format_uint, Conversion, Flags, FormatSpec};
pub use parse::{from_str_radix, from_str_radix_signed, parse_prefix, parse_prefix_signed};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest power of `radix` that fits a word, and its exponent
pub(crate) fn chunk_power(radix: u32) -> (u64, usize) {
    let radix = radix as u64;
    let (mut power, mut k) = (radix, 1);
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        k += 1;
    }
    (power, k)
}

fn push_word_digits(out: &mut Vec<u8>, mut w: u64, radix: u64, min_len: usize) {
    let start = out.len();
    while w != 0 {
        out.push(DIGITS[(w % radix) as usize]);
        w /= radix;
    }
    while out.len() - start < min_len {
        out.push(b'0');
    }
}

/// Digits of `v` in `radix` (2 to 36), most significant first, no prefix
pub fn to_str_radix<T: UInt>(v: T, radix: u32, upper: bool) -> String {
    debug_assert!((2..=36).contains(&radix), "radix out of range");
    if v.is_zero() {
        return "0".to_string();
    }

    // one short division per word-sized chunk of digits, least significant first
    let (power, k) = chunk_power(radix);
    let mut digits = Vec::with_capacity(T::BITS as usize);
    let mut v = v;
    while !v.is_zero() {
        let (q, r) = v.div_rem_u64(power);
        let min_len = if q.is_zero() { 0 } else { k };
        push_word_digits(&mut digits, r, radix as u64, min_len);
        v = q;
    }

    digits.reverse();
    if upper {
        digits.make_ascii_uppercase();
    }
    // only ascii digits were pushed
    digits.into_iter().map(char::from).collect()
}

macro_rules! impl_fmt_unsigned {
    ($ty:ty $(, $h:ident)?) => {
        impl$(<$h: UInt>)? fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, "", &to_str_radix(*self, 10, false))
            }
        }

        impl$(<$h: UInt>)? fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl$(<$h: UInt>)? fmt::LowerHex for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, "0x", &to_str_radix(*self, 16, false))
            }
        }

        impl$(<$h: UInt>)? fmt::UpperHex for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, "0x", &to_str_radix(*self, 16, true))
            }
        }

        impl$(<$h: UInt>)? fmt::Octal for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, "0o", &to_str_radix(*self, 8, false))
            }
        }

        impl$(<$h: UInt>)? fmt::Binary for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, "0b", &to_str_radix(*self, 2, false))
            }
        }
    };
}

impl_fmt_unsigned!(U64);
impl_fmt_unsigned!(UBigIntImpl<H>, H);

impl<U: UInt> fmt::Display for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &to_str_radix(self.unsigned_abs(), 10, false))
    }
}

impl<U: UInt> fmt::Debug for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Radix formats show the two's complement bits, like the native signed types
impl<U: UInt> fmt::LowerHex for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &to_str_radix(self.0, 16, false))
    }
}

impl<U: UInt> fmt::UpperHex for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &to_str_radix(self.0, 16, true))
    }
}

impl<U: UInt> fmt::Octal for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &to_str_radix(self.0, 8, false))
    }
}

impl<U: UInt> fmt::Binary for BigIntImpl<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &to_str_radix(self.0, 2, false))
    }
}
