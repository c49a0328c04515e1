/// Count leading zero bits; 64 for zero
pub const fn clz(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    let mut n = 0;
    let mut x = x;
    if x >> 32 == 0 {
        n += 32;
        x <<= 32;
    }
    if x >> 48 == 0 {
        n += 16;
        x <<= 16;
    }
    if x >> 56 == 0 {
        n += 8;
        x <<= 8;
    }
    if x >> 60 == 0 {
        n += 4;
        x <<= 4;
    }
    if x >> 62 == 0 {
        n += 2;
        x <<= 2;
    }
    if x >> 63 == 0 {
        n += 1;
    }
    n
}

#[inline(always)]
pub(super) fn clz_native(x: u64) -> u32 {
    x.leading_zeros()
}
