use core::str::FromStr;

use crate::bigint::BigIntImpl;
use crate::error::ParseIntError;
use crate::text::chunk_power;
use crate::ubigint::{UBigIntImpl, UInt, U64};

#[inline]
fn digit(b: u8, radix: u32) -> Option<u64> {
    (b as char).to_digit(radix).map(|d| d as u64)
}

/// Accumulate digits from `bytes[i..]` while they are valid in `radix`,
/// a word-sized chunk at a time. Returns the value and the end index.
fn accumulate<T: UInt>(bytes: &[u8], mut i: usize, radix: u32) -> (T, usize) {
    let (power, k) = chunk_power(radix);
    let mut acc = T::ZERO;
    let (mut chunk, mut len) = (0u64, 0);

    while let Some(d) = bytes.get(i).and_then(|&b| digit(b, radix)) {
        chunk = chunk * radix as u64 + d;
        len += 1;
        i += 1;
        if len == k {
            acc = acc.mul_add_u64(power, chunk);
            (chunk, len) = (0, 0);
        }
    }
    if len > 0 {
        acc = acc.mul_add_u64((radix as u64).pow(len as u32), chunk);
    }
    (acc, i)
}

/// strtoul-style prefix parse.
///
/// Skips leading whitespace, takes an optional `+` or `-` (which negates
/// modulo `2^BITS`), then digits in `radix`. A radix of 0 picks 16 after a
/// `0x`, 8 after a lone leading `0` and 10 otherwise; radix 16 also skips an
/// optional `0x`. Returns the value and the index just past the last digit,
/// or `(0, 0)` when no digit was found. Overflow wraps.
pub fn parse_prefix<T: UInt>(s: &str, radix: u32) -> (T, usize) {
    let bytes = s.as_bytes();
    if radix == 1 || radix > 36 {
        return (T::ZERO, 0);
    }

    let mut i = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    // "0x" only counts as a prefix when a hex digit follows it
    let hex_prefix = bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x' | b'X'))
        && bytes.get(i + 2).and_then(|&b| digit(b, 16)).is_some();
    let radix = match radix {
        0 if hex_prefix => 16,
        0 if bytes.get(i) == Some(&b'0') => 8,
        0 => 10,
        r => r,
    };
    if radix == 16 && hex_prefix {
        i += 2;
    }

    let start = i;
    let (acc, end) = accumulate::<T>(bytes, i, radix);
    if end == start {
        return (T::ZERO, 0);
    }
    if negative {
        (acc.wrapping_neg(), end)
    } else {
        (acc, end)
    }
}

/// [`parse_prefix`] into a signed value; the sign bits wrap like `strtol`
/// without the clamping
pub fn parse_prefix_signed<U: UInt>(s: &str, radix: u32) -> (BigIntImpl<U>, usize) {
    let (bits, end) = parse_prefix::<U>(s, radix);
    (BigIntImpl::from_bits(bits), end)
}

/// Whole-string parse of digits in `radix`, wrapping on overflow
pub fn from_str_radix<T: UInt>(s: &str, radix: u32) -> Result<T, ParseIntError> {
    from_digits(s, 0, radix)
}

fn from_digits<T: UInt>(s: &str, offset: usize, radix: u32) -> Result<T, ParseIntError> {
    if !(2..=36).contains(&radix) {
        return Err(ParseIntError::InvalidRadix(radix));
    }
    if s.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let (value, end) = accumulate::<T>(s.as_bytes(), 0, radix);
    if end != s.len() {
        return Err(ParseIntError::InvalidDigit { index: offset + end });
    }
    Ok(value)
}

/// Digits after an optional `0x`, `0o` or `0b` prefix
fn from_prefixed<T: UInt>(s: &str, offset: usize) -> Result<T, ParseIntError> {
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        Some("0o" | "0O") => (8, &s[2..]),
        Some("0b" | "0B") => (2, &s[2..]),
        _ => (10, s),
    };
    from_digits(digits, offset + s.len() - digits.len(), radix)
}

/// Whole-string parse with an optional leading sign; `-` negates, wrapping
pub fn from_str_radix_signed<U: UInt>(s: &str, radix: u32) -> Result<BigIntImpl<U>, ParseIntError> {
    let (negative, digits) = split_sign(s);
    let mag: U = from_digits(digits, s.len() - digits.len(), radix)?;
    Ok(signed(negative, mag))
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn signed<U: UInt>(negative: bool, mag: U) -> BigIntImpl<U> {
    if negative {
        BigIntImpl::from_bits(mag.wrapping_neg())
    } else {
        BigIntImpl::from_bits(mag)
    }
}

macro_rules! impl_from_str_unsigned {
    ($ty:ty $(, $h:ident)?) => {
        /// Decimal, or hex, octal or binary behind a `0x`, `0o` or `0b` prefix
        impl$(<$h: UInt>)? FromStr for $ty {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                from_prefixed(s, 0)
            }
        }
    };
}

impl_from_str_unsigned!(U64);
impl_from_str_unsigned!(UBigIntImpl<H>, H);

impl<U: UInt> FromStr for BigIntImpl<U> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = split_sign(s);
        let mag: U = from_prefixed(rest, s.len() - rest.len())?;
        Ok(signed(negative, mag))
    }
}
