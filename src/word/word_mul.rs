const MASK32: u64 = 0xffff_ffff;

/// Full 64x64 -> 128 bit product, returned as `(high, low)`
///
/// Built from four 32x32 products so it stays usable in constant evaluation.
pub const fn mul128(a: u64, b: u64) -> (u64, u64) {
    let (a0, a1) = (a & MASK32, a >> 32);
    let (b0, b1) = (b & MASK32, b >> 32);

    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;

    // at most 3 * (2^32 - 1), no overflow
    let mid = (p00 >> 32) + (p01 & MASK32) + (p10 & MASK32);

    let lo = (mid << 32) | (p00 & MASK32);
    let hi = p11 + (p01 >> 32) + (p10 >> 32) + (mid >> 32);
    (hi, lo)
}

#[inline(always)]
pub(super) fn mul128_native(a: u64, b: u64) -> (u64, u64) {
    let wide = (a as u128) * (b as u128);
    ((wide >> 64) as u64, wide as u64)
}
