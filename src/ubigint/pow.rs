use crate::ubigint::{Reciprocal, UInt};

/// `base^e` modulo `2^BITS`, left to right square and multiply
pub(crate) fn pow<T: UInt>(base: T, e: T) -> T {
    let mut acc = T::ONE;
    for i in (0..T::BITS - e.clz()).rev() {
        acc = acc.wrapping_mul(acc);
        if e.bit(i) {
            acc = acc.wrapping_mul(base);
        }
    }
    acc
}

#[inline]
fn mul_mod<T: UInt>(a: T, b: T, m: &Reciprocal<T>) -> T {
    // a, b < m, so the high half of the product is below m
    let (hi, lo) = a.widening_mul(b);
    m.div_rem_wide(hi, lo).1
}

pub(crate) fn pow_mod<T: UInt>(base: T, e: T, m: &Reciprocal<T>) -> T {
    let base = m.div_rem(base).1;
    let mut acc = m.div_rem(T::ONE).1;
    for i in (0..T::BITS - e.clz()).rev() {
        acc = mul_mod(acc, acc, m);
        if e.bit(i) {
            acc = mul_mod(acc, base, m);
        }
    }
    acc
}

pub(crate) fn gcd<T: UInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = a.div_rem(b).1;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod test {
    use crate::ubigint::{Reciprocal, UInt, U128, U256, U512};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::One;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_pow_u128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..200 {
            let a: u128 = prng.gen();
            let e: u32 = prng.gen_range(0..300);
            let x = U128::from_u128(a).pow(U128::from_u64(e as u64));
            assert_eq!(x.as_u128(), a.wrapping_pow(e));
        }
        assert_eq!(U128::from_u64(3).pow(U128::ZERO), U128::ONE);
        assert_eq!(U128::from_u64(2).pow(U128::from_u64(127)), U128::ONE << 127);
        assert_eq!(U128::from_u64(2).pow(U128::from_u64(128)), U128::ZERO);
    }

    #[test]
    fn test_pow_mod() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..20 {
            let a: BigUint = prng.sample(RandomBits::new(512));
            let e: BigUint = prng.sample(RandomBits::new(64));
            let m: BigUint = prng.sample(RandomBits::new(500));
            let m = m.max(BigUint::one());

            let recip = Reciprocal::new(U512::from_biguint(&m));
            let r = U512::from_biguint(&a).pow_mod(U512::from_biguint(&e), &recip);
            assert_eq!(r.to_biguint(), a.modpow(&e, &m));
        }
    }

    #[test]
    fn test_pow_mod_by_repeated_multiplication() {
        let m = U256::from_u64(1_000_000_007);
        let recip = Reciprocal::new(m);
        let base = U256::from_u64(123_456_789);

        let mut expect = U256::ONE;
        for e in 0..50u64 {
            assert_eq!(base.pow_mod(U256::from_u64(e), &recip), expect);
            expect = (expect * base) % m;
        }

        // everything is zero modulo one
        assert_eq!(base.pow_mod(U256::ZERO, &Reciprocal::new(U256::ONE)), U256::ZERO);
    }

    fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    #[test]
    fn test_gcd() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..200 {
            let k: u128 = prng.gen_range(1..1 << 20);
            let a: u128 = (prng.gen::<u64>() as u128) * k;
            let b: u128 = (prng.gen::<u64>() as u128) * k;
            assert_eq!(U128::from_u128(a).gcd(U128::from_u128(b)).as_u128(), gcd_u128(a, b));
        }
        assert_eq!(U128::ZERO.gcd(U128::from_u64(12)), U128::from_u64(12));
        assert_eq!(U128::from_u64(12).gcd(U128::ZERO), U128::from_u64(12));
    }
}
