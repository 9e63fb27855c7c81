/// Exact `2^k` as f64, built straight from the exponent field.
///
/// `k` is clamped to the normal range `-1022..=1023`.
#[inline]
pub fn exp2i(k: i32) -> f64 {
    let e = k.clamp(-1022, 1023) + 1023;
    f64::from_bits((e as u64) << 52)
}
