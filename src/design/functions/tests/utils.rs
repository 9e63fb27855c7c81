use crate::core::word::F32Word;

/// Distance in f32 ULPs between two words (sign-magnitude ordered).
#[inline]
pub fn ulp_diff_f32(a: F32Word, b: F32Word) -> u64 {
    fn ordered(u: u32) -> i64 {
        if u & 0x8000_0000 != 0 {
            -((u & 0x7FFF_FFFF) as i64)
        } else {
            u as i64
        }
    }

    (ordered(a.to_bits()) - ordered(b.to_bits())).unsigned_abs()
}

/// Read every line of a rendered table back into words.
pub fn parse_hex_lines(text: &str) -> Vec<F32Word> {
    text.lines()
        .map(|l| l.parse().expect("valid hex word"))
        .collect()
}

#[cfg(test)]
mod ulp {
    use super::ulp_diff_f32;
    use crate::core::word::F32Word;

    #[test]
    fn ulp_diff_counts_across_zero() {
        let one = F32Word::ONE;
        let next = F32Word::from_bits(one.to_bits() + 1);
        assert_eq!(ulp_diff_f32(one, next), 1);
        assert_eq!(ulp_diff_f32(next, one), 1);
        assert_eq!(ulp_diff_f32(F32Word::from(0.0f32), F32Word::from(-0.0f32)), 0);

        // Opposite-signed extremes span both halves of the ordering.
        let max = F32Word::from(f32::MAX);
        let min = F32Word::from(f32::MIN);
        assert_eq!(ulp_diff_f32(max, min), 2 * 0x7F7F_FFFF);
        assert_eq!(ulp_diff_f32(min, max), 0xFEFF_FFFE);
    }
}
