//! This module contains the growable unsigned integer [`uint::DynUint`] and
//! the arithmetic defined over it.
//!
//! Storage lives in [`uint`], machine word helpers in [`limb`]. Operator
//! implementations are spread over private submodules, one per operation
//! family.

/// Parse a decimal string literal into a [`crate::DynUint`].
///
/// ```
/// use openzeppelin_bignum::{from_num, DynUint};
///
/// let num: DynUint = from_num!("1000000000000000000000");
/// assert_eq!(num.to_hex_string(), "3635c9adc5dea00000");
/// ```
#[macro_export]
macro_rules! from_num {
    ($num:literal) => {
        $crate::DynUint::parse_decimal($num)
    };
}

/// Parse a hexadecimal string literal into a [`crate::DynUint`].
///
/// The literal may carry a `0x` prefix.
#[macro_export]
macro_rules! from_hex {
    ($num:literal) => {
        $crate::DynUint::parse_hex($num)
    };
}

pub mod limb;
pub mod uint;

mod div;
mod fmt;
mod mul;
mod ops;
mod parse;
mod shift;
