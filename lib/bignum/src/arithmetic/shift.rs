//! Logical bit shifts of [`DynUint`]s.

use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::arithmetic::{limb::LIMB_BITS, uint::DynUint};

impl ShlAssign<usize> for DynUint {
    /// Computes the bitwise shift left operation in place.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation never overflows: `self` grows to hold every shifted bit.
    fn shl_assign(&mut self, rhs: usize) {
        if rhs == 0 || self.is_zero() {
            return;
        }

        let shift_limbs = rhs / LIMB_BITS;
        let shift_bits = rhs % LIMB_BITS;
        let old_len = self.num_limbs();
        let top_bits = if shift_bits > 0 {
            self.as_limbs()[old_len - 1] >> (LIMB_BITS - shift_bits)
        } else {
            0
        };
        let new_len = old_len + shift_limbs + usize::from(top_bits != 0);
        self.scale(new_len);

        let limbs = self.as_limbs_mut();
        if shift_limbs > 0 {
            limbs.copy_within(0..old_len, shift_limbs);
            limbs[..shift_limbs].fill(0);
        }

        if shift_bits > 0 {
            let mut t = 0;
            for a in &mut limbs[shift_limbs..] {
                let t2 = *a >> (LIMB_BITS - shift_bits);
                *a <<= shift_bits;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl Shl<usize> for DynUint {
    type Output = Self;

    /// Computes the bitwise shift left operation.
    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl ShrAssign<usize> for DynUint {
    /// Computes the bitwise shift right operation in place.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation does *not* return an underflow error if the number of bits
    /// shifted is larger than the size of `self`. Instead the result will be
    /// saturated to zero.
    fn shr_assign(&mut self, rhs: usize) {
        if rhs == 0 || self.is_zero() {
            return;
        }

        let shift_limbs = rhs / LIMB_BITS;
        let shift_bits = rhs % LIMB_BITS;
        let old_len = self.num_limbs();
        if shift_limbs >= old_len {
            self.set_zero();
            return;
        }

        let new_len = old_len - shift_limbs;
        let limbs = self.as_limbs_mut();
        if shift_limbs > 0 {
            limbs.copy_within(shift_limbs..old_len, 0);
            limbs[new_len..].fill(0);
        }

        if shift_bits > 0 {
            let mut t = 0;
            for a in limbs[..new_len].iter_mut().rev() {
                let t2 = *a << (LIMB_BITS - shift_bits);
                *a >>= shift_bits;
                *a |= t;
                t = t2;
            }
        }
        self.autoscale();
    }
}

impl Shr<usize> for DynUint {
    type Output = Self;

    /// Computes bitwise shift right operation.
    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}
