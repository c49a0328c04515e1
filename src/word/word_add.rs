/// Add two words and an incoming carry, returning the sum and the outgoing carry
pub const fn adc(carry: bool, a: u64, b: u64) -> (u64, bool) {
    let sum = a.wrapping_add(b);
    let c0 = sum < a;
    let sum_c = sum.wrapping_add(carry as u64);
    let c1 = sum_c < sum;
    (sum_c, c0 | c1)
}

#[inline(always)]
#[allow(unused_unsafe)]
pub(super) fn adc_native(carry: bool, a: u64, b: u64) -> (u64, bool) {
    #[cfg(target_arch = "x86_64")]
    {
        let mut out = 0u64;
        let c = unsafe { core::arch::x86_64::_addcarry_u64(carry as u8, a, b, &mut out) };
        (out, c != 0)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let wide = a as u128 + b as u128 + carry as u128;
        (wide as u64, (wide >> 64) != 0)
    }
}
