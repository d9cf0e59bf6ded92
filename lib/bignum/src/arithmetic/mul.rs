//! Karatsuba multiplication of [`DynUint`]s.

use core::{
    borrow::Borrow,
    ops::{Mul, MulAssign},
};

use num_traits::One;

use crate::arithmetic::{
    limb::{self, Limb, LIMB_BITS},
    ops::trim_limbs,
    uint::DynUint,
};

/// Multiply `lhs` by `rhs`, returning the product.
///
/// Operands are split recursively in the manner of [Karatsuba], so only three
/// half-size products are computed per level, down to single [`Limb`]
/// factors.
///
/// [Karatsuba]: https://en.wikipedia.org/wiki/Karatsuba_algorithm
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(lhs_bits = lhs.num_bits(), rhs_bits = rhs.num_bits())
)]
fn product(lhs: &DynUint, rhs: &DynUint) -> DynUint {
    karatsuba(lhs.as_limbs(), rhs.as_limbs())
}

/// Multiply little-endian `a` and `b` limbs.
///
/// With `B` the limb base and `k` the low half length of the longer operand:
///
/// ```text
/// a * b = p1 * B^(2k) + (p3 - p1 - p2) * B^k + p2
/// ```
///
/// where `p1 = a_hi * b_hi`, `p2 = a_lo * b_lo` and
/// `p3 = (a_hi + a_lo) * (b_hi + b_lo)`.
fn karatsuba(a: &[Limb], b: &[Limb]) -> DynUint {
    let (a, b) = (trim_limbs(a), trim_limbs(b));
    if a.is_empty() || b.is_empty() {
        return DynUint::new();
    }
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if a.len() == 1 {
        let (lo, hi) = limb::widening_mul(a[0], b[0]);
        return DynUint::from_limbs(&[lo, hi]);
    }

    let k = a.len() - a.len() / 2;
    let (a_lo, a_hi) = a.split_at(k);
    let (b_lo, b_hi) = b.split_at(k.min(b.len()));

    let mut p1 = karatsuba(a_hi, b_hi);
    let p2 = karatsuba(a_lo, b_lo);

    let mut p3 = {
        let mut a_sum = DynUint::from_limbs(a_lo);
        a_sum.add_limbs_assign(a_hi);
        let mut b_sum = DynUint::from_limbs(b_lo);
        b_sum.add_limbs_assign(b_hi);
        karatsuba(a_sum.as_limbs(), b_sum.as_limbs())
    };

    let no_underflow = p3.sub_limbs_assign(p2.as_limbs())
        && p3.sub_limbs_assign(p1.as_limbs());
    debug_assert!(no_underflow, "cross term is a sum of two products");

    p3 <<= k * LIMB_BITS;
    p1 <<= 2 * k * LIMB_BITS;
    p3 += p1;
    p3 += p2;
    p3
}

impl<B: Borrow<DynUint>> MulAssign<B> for DynUint {
    fn mul_assign(&mut self, rhs: B) {
        *self = product(self, rhs.borrow());
    }
}

impl<B: Borrow<DynUint>> Mul<B> for DynUint {
    type Output = DynUint;

    fn mul(self, rhs: B) -> Self::Output {
        product(&self, rhs.borrow())
    }
}

impl<B: Borrow<DynUint>> Mul<B> for &DynUint {
    type Output = DynUint;

    fn mul(self, rhs: B) -> Self::Output {
        product(self, rhs.borrow())
    }
}

impl One for DynUint {
    fn one() -> Self {
        DynUint::from(1u64)
    }

    fn is_one(&self) -> bool {
        self.cmp_limb(1).is_eq()
    }
}
