pub fn gcd_signed(mut a: i64, mut b: i64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}

pub fn gcd_signed_i128(mut a: i128, mut b: i128) -> u128 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i128::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}

/// Compute the least common multiple of `|a|` and `|b|`.
/// Returns `Some(0)` if either argument is zero and `None` if the result does not fit.
pub fn lcm_signed(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }

    let g = gcd_signed(a, b);
    (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())
}

/// Divide out all factors `p` from `n`. `n` must be non-zero.
pub fn strip_factor(mut n: u64, p: u64) -> u64 {
    debug_assert!(n != 0 && p > 1);
    while n % p == 0 {
        n /= p;
    }
    n
}
