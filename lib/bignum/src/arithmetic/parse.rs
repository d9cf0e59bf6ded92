//! Parsing [`DynUint`]s from decimal and hexadecimal text.

use alloc::vec::Vec;
use core::{convert::Infallible, str::FromStr};

use crate::arithmetic::{
    limb::{Limb, LIMB_BITS},
    uint::DynUint,
};

/// Number of hex digits packed in a single [`Limb`].
const HEX_DIGITS_PER_LIMB: usize = LIMB_BITS / 4;

/// Skip leading whitespace and zeros, then take the run of digits in `radix`.
fn digit_run(text: &str, radix: u32) -> &str {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '0');
    let end = text.find(|c: char| !c.is_digit(radix)).unwrap_or(text.len());
    &text[..end]
}

impl DynUint {
    /// Parse a decimal number from `text`.
    ///
    /// Leading whitespace and zeros are skipped and parsing stops at the
    /// first non-digit character. Text without any digits parses as zero.
    ///
    /// Conversion goes through packed decimal: the number is halved digit by
    /// digit and every emitted remainder becomes the next binary digit.
    #[must_use]
    pub fn parse_decimal(text: &str) -> Self {
        let digits = digit_run(text, 10);
        if digits.is_empty() {
            return Self::new();
        }

        let mut bcd: Vec<u8> =
            digits.bytes().map(|digit| digit - b'0').collect();
        // A decimal digit carries less than 10/3 bits.
        let mut result = Self::with_len(bcd.len() * 10 / 3 / LIMB_BITS + 1);

        let last = bcd.len() - 1;
        let mut start = 0;
        let mut bit = 0;
        while start <= last {
            if bcd[last] & 1 == 1 {
                let word = bit / LIMB_BITS;
                if word >= result.num_limbs() {
                    result.scale(word + 1);
                }
                result.as_limbs_mut()[word] |= 1 << (bit % LIMB_BITS);
            }
            bit += 1;

            // The low bit of a digit moves down as 8 into the next one.
            for i in (start + 1..=last).rev() {
                bcd[i] >>= 1;
                if bcd[i - 1] & 1 == 1 {
                    bcd[i] |= 8;
                }
            }
            bcd[start] >>= 1;

            while start <= last && bcd[start] == 0 {
                start += 1;
            }
            for digit in &mut bcd[start..] {
                if *digit > 7 {
                    *digit -= 3;
                }
            }
        }

        result.autoscale();
        result
    }

    /// Parse a hexadecimal number from `text`.
    ///
    /// Accepts an optional `0x` or `0X` prefix after leading whitespace and
    /// both letter cases. Parsing stops at the first non-hex character.
    #[must_use]
    pub fn parse_hex(text: &str) -> Self {
        let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let text = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let digits = digit_run(text, 16);
        if digits.is_empty() {
            return Self::new();
        }

        let mut result = Self::with_len(digits.len().div_ceil(HEX_DIGITS_PER_LIMB));
        let limbs = result.as_limbs_mut();
        for (i, c) in digits.chars().rev().enumerate() {
            let nibble = Limb::from(c.to_digit(16).unwrap_or_default());
            limbs[i / HEX_DIGITS_PER_LIMB] |= nibble << (4 * (i % HEX_DIGITS_PER_LIMB));
        }

        result.autoscale();
        result
    }
}

impl FromStr for DynUint {
    type Err = Infallible;

    /// Parse a decimal number, see [`DynUint::parse_decimal`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_decimal(s))
    }
}
