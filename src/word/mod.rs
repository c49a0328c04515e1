//! Single-word primitives the whole engine is built from.
//!
//! Every primitive has a portable `const fn` form that only uses shifts,
//! comparisons and 32x32 multiplies, and a native form that reaches for
//! carry flags, 128-bit multiplies and the hardware divide. The native form
//! is selected with the `native` cargo feature. The two must agree on every
//! input.

mod word_add;
mod word_clz;
mod word_div;
mod word_mul;
mod word_sub;

/// The `const fn` implementations, callable in constant evaluation.
pub mod portable {
    pub use super::word_add::adc;
    pub use super::word_clz::clz;
    pub use super::word_div::divmod128_64;
    pub use super::word_mul::mul128;
    pub use super::word_sub::sbc;
}

/// A strategy for the word primitives.
pub trait WordOps {
    fn adc(carry: bool, a: u64, b: u64) -> (u64, bool);
    fn sbc(borrow: bool, a: u64, b: u64) -> (u64, bool);
    fn mul128(a: u64, b: u64) -> (u64, u64);
    fn divmod128_64(hi: u64, lo: u64, d: u64) -> (u64, u64);
    fn clz(x: u64) -> u32;
}

/// Software fallback, identical to the functions in [`portable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

/// Hardware carry chain, 128-bit multiply and divide.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native;

impl WordOps for Portable {
    #[inline]
    fn adc(carry: bool, a: u64, b: u64) -> (u64, bool) {
        portable::adc(carry, a, b)
    }

    #[inline]
    fn sbc(borrow: bool, a: u64, b: u64) -> (u64, bool) {
        portable::sbc(borrow, a, b)
    }

    #[inline]
    fn mul128(a: u64, b: u64) -> (u64, u64) {
        portable::mul128(a, b)
    }

    #[inline]
    fn divmod128_64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
        portable::divmod128_64(hi, lo, d)
    }

    #[inline]
    fn clz(x: u64) -> u32 {
        portable::clz(x)
    }
}

impl WordOps for Native {
    #[inline]
    fn adc(carry: bool, a: u64, b: u64) -> (u64, bool) {
        word_add::adc_native(carry, a, b)
    }

    #[inline]
    fn sbc(borrow: bool, a: u64, b: u64) -> (u64, bool) {
        word_sub::sbc_native(borrow, a, b)
    }

    #[inline]
    fn mul128(a: u64, b: u64) -> (u64, u64) {
        word_mul::mul128_native(a, b)
    }

    #[inline]
    fn divmod128_64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
        word_div::divmod128_64_native(hi, lo, d)
    }

    #[inline]
    fn clz(x: u64) -> u32 {
        word_clz::clz_native(x)
    }
}

/// The strategy used by the rest of the crate.
#[cfg(feature = "native")]
pub type Backend = Native;

/// The strategy used by the rest of the crate.
#[cfg(not(feature = "native"))]
pub type Backend = Portable;

#[inline(always)]
pub fn adc(carry: bool, a: u64, b: u64) -> (u64, bool) {
    Backend::adc(carry, a, b)
}

#[inline(always)]
pub fn sbc(borrow: bool, a: u64, b: u64) -> (u64, bool) {
    Backend::sbc(borrow, a, b)
}

#[inline(always)]
pub fn mul128(a: u64, b: u64) -> (u64, u64) {
    Backend::mul128(a, b)
}

#[inline(always)]
pub fn divmod128_64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    Backend::divmod128_64(hi, lo, d)
}

#[inline(always)]
pub fn clz(x: u64) -> u32 {
    Backend::clz(x)
}
