//! Rendering [`DynUint`]s as decimal and hexadecimal text.

use alloc::{string::String, vec};
use core::fmt::{Debug, Display, Formatter, LowerHex, Result, UpperHex};

use crate::{
    arithmetic::{limb::LIMB_BITS, uint::DynUint},
    bits::BitIteratorBE,
};

const LOWER_HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl DynUint {
    /// Render `self` as a decimal string without leading zeros.
    ///
    /// Uses the [double dabble] algorithm: bits are shifted in from the most
    /// significant one into a packed decimal buffer, correcting every digit
    /// above 4 by 3 before each doubling.
    ///
    /// [double dabble]: https://en.wikipedia.org/wiki/Double_dabble
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        // A bit carries less than 1/3 of a decimal digit.
        let len = self.num_bits() / 3 + 1;
        let mut bcd = vec![0u8; len];
        let mut start = len - 1;
        for bit in self.bit_be_trimmed_iter() {
            for digit in &mut bcd[start..] {
                if *digit > 4 {
                    *digit += 3;
                }
            }
            if bcd[start] > 7 {
                start -= 1;
            }

            let mut carry = u8::from(bit);
            for digit in bcd[start..].iter_mut().rev() {
                let doubled = (*digit << 1) | carry;
                carry = doubled >> 4;
                *digit = doubled & 0xF;
            }
        }

        bcd[start..]
            .iter()
            .skip_while(|&&digit| digit == 0)
            .map(|&digit| char::from(b'0' + digit))
            .collect()
    }

    /// Render `self` as a lowercase hexadecimal string without prefix and
    /// leading zeros.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.hex_digits(LOWER_HEX_DIGITS)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hex_digits(&self, alphabet: &[u8; 16]) -> String {
        let digits: String = self
            .as_limbs()
            .iter()
            .rev()
            .flat_map(|&limb| {
                (0..LIMB_BITS / 4).rev().map(move |i| (limb >> (4 * i)) & 0xF)
            })
            .skip_while(|&nibble| nibble == 0)
            .map(|nibble| char::from(alphabet[nibble as usize]))
            .collect();
        if digits.is_empty() {
            String::from("0")
        } else {
            digits
        }
    }
}

impl Display for DynUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl Debug for DynUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}

impl LowerHex for DynUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.hex_digits(LOWER_HEX_DIGITS))
    }
}

impl UpperHex for DynUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.hex_digits(UPPER_HEX_DIGITS))
    }
}
