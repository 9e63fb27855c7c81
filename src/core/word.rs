use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Raw IEEE-754 binary32 bit pattern of a table sample.
///
/// The word is always produced by reinterpreting the bits of an `f32`
/// (`f32::to_bits`), never by a numeric cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct F32Word(u32);

impl F32Word {
    /// Number of hex digits in one rendered word.
    pub const HEX_DIGITS: usize = 8;

    /// 1.0f32: s=0, e=127, m=0 => 0x3F80_0000
    pub const ONE: Self = Self(0x3F80_0000);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Narrow an f64 to f32 (round-to-nearest-even) and keep its bits.
    #[inline]
    pub fn narrow(y: f64) -> Self {
        Self((y as f32).to_bits())
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    // Self-explanatory
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// Biased exponent field (bits 30..23).
    #[inline]
    pub const fn exponent_field(self) -> u8 {
        ((self.0 >> 23) & 0xFF) as u8
    }

    /// True for finite, non-zero, non-subnormal patterns.
    #[inline]
    pub const fn is_normal(self) -> bool {
        let e = self.exponent_field();
        e != 0 && e != 0xFF
    }
}

impl From<f32> for F32Word {
    #[inline]
    fn from(v: f32) -> Self {
        Self(v.to_bits())
    }
}

impl From<F32Word> for f32 {
    #[inline]
    fn from(w: F32Word) -> f32 {
        w.to_f32()
    }
}

// ===============================
// Text form
// ===============================

/// Zero-padded lowercase hex, most significant digit first, no prefix.
impl fmt::Display for F32Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::LowerHex for F32Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordParseError {
    #[error("expected 8 hex digits, found {found}")]
    Length { found: usize },
    #[error("invalid hex digit {digit:?} at position {position}")]
    Digit { digit: char, position: usize },
}

impl FromStr for F32Word {
    type Err = WordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != Self::HEX_DIGITS {
            return Err(WordParseError::Length { found });
        }

        let mut bits = 0u32;
        for (position, digit) in s.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(WordParseError::Digit { digit, position })?;
            bits = (bits << 4) | nibble;
        }

        Ok(Self(bits))
    }
}
