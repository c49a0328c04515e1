/// Subtract `b` and an incoming borrow from `a`, returning the difference and the outgoing borrow
pub const fn sbc(borrow: bool, a: u64, b: u64) -> (u64, bool) {
    let diff = a.wrapping_sub(b);
    let b0 = a < b;
    let diff_b = diff.wrapping_sub(borrow as u64);
    let b1 = diff < borrow as u64;
    (diff_b, b0 | b1)
}

#[inline(always)]
#[allow(unused_unsafe)]
pub(super) fn sbc_native(borrow: bool, a: u64, b: u64) -> (u64, bool) {
    #[cfg(target_arch = "x86_64")]
    {
        let mut out = 0u64;
        let b = unsafe { core::arch::x86_64::_subborrow_u64(borrow as u8, a, b, &mut out) };
        (out, b != 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let wide = (a as u128)
            .wrapping_sub(b as u128)
            .wrapping_sub(borrow as u128);
        (wide as u64, (wide >> 64) != 0)
    }
}
