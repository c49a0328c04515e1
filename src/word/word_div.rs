use super::word_clz::clz;

const HALF: u64 = 1 << 32;
const MASK32: u64 = HALF - 1;

/// Divide the 128-bit value `hi:lo` by `d`, returning `(quotient, remainder)`
///
/// # Note
///
/// The caller guarantees `hi < d`, so the quotient fits in one word.
/// This is the two-digit long division over 32-bit half words with the
/// usual normalization and at most two corrections per digit.
pub const fn divmod128_64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(hi < d);

    let s = clz(d);
    let d = d << s;
    let dn1 = d >> 32;
    let dn0 = d & MASK32;

    let un32 = if s == 0 { hi } else { (hi << s) | (lo >> (64 - s)) };
    let un10 = lo << s;
    let un1 = un10 >> 32;
    let un0 = un10 & MASK32;

    // upper quotient digit
    let mut q1 = un32 / dn1;
    let mut rhat = un32 - q1 * dn1;
    while q1 >= HALF || q1 * dn0 > (rhat << 32) + un1 {
        q1 -= 1;
        rhat += dn1;
        if rhat >= HALF {
            break;
        }
    }

    let un21 = (un32 << 32)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(d));

    // lower quotient digit
    let mut q0 = un21 / dn1;
    let mut rhat = un21 - q0 * dn1;
    while q0 >= HALF || q0 * dn0 > (rhat << 32) + un0 {
        q0 -= 1;
        rhat += dn1;
        if rhat >= HALF {
            break;
        }
    }

    let rem = (un21 << 32)
        .wrapping_add(un0)
        .wrapping_sub(q0.wrapping_mul(d));

    ((q1 << 32) | q0, rem >> s)
}

#[inline(always)]
#[allow(unused_unsafe)]
pub(super) fn divmod128_64_native(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(hi < d);
    #[cfg(target_arch = "x86_64")]
    {
        let q: u64;
        let r: u64;
        unsafe {
            core::arch::asm!(
                "div {d}",
                d = in(reg) d,
                inout("rax") lo => q,
                inout("rdx") hi => r,
                options(pure, nomem, nostack)
            );
        }
        (q, r)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let n = ((hi as u128) << 64) | lo as u128;
        ((n / d as u128) as u64, (n % d as u128) as u64)
    }
}
