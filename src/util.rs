use num_rational::Rational64;

pub fn is_pow2(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Largest power of two not above `n`, or 0 when `n` is not positive.
pub fn floor_pow2(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    1 << (63 - n.leading_zeros())
}

/// `n` with every factor of two divided out.
pub fn odd_part(n: i64) -> i64 {
    if n == 0 {
        return 0;
    }
    n >> n.trailing_zeros()
}

/// Whether `r` is a positive integral power of two, such as 1/8, 1 or 4.
pub fn is_pow2_ratio(r: &Rational64) -> bool {
    (*r.numer() == 1 && is_pow2(*r.denom())) || (*r.denom() == 1 && is_pow2(*r.numer()))
}
