//! Single-word primitives with explicit carry and borrow propagation.

/// Machine word of a [`crate::DynUint`].
pub type Limb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: usize = Limb::BITS as usize;

/// Number of bits in half of a [`Limb`].
const HALF_BITS: u32 = Limb::BITS / 2;

/// Mask selecting the low half of a [`Limb`].
const HALF_MASK: Limb = (1 << HALF_BITS) - 1;

/// Multiply two [`Limb`]'s and return the `(lo, hi)` words of the product.
///
/// Each factor is split into halves of [`HALF_BITS`] bits, so every partial
/// product fits into a single [`Limb`] and no double-width type is needed.
/// The two cross products are summed with explicit detection of the carry
/// they may produce.
#[inline(always)]
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let a_lo = a & HALF_MASK;
    let a_hi = a >> HALF_BITS;
    let b_lo = b & HALF_MASK;
    let b_hi = b >> HALF_BITS;

    let lolo = a_lo * b_lo;
    let lohi = a_lo * b_hi;
    let hilo = a_hi * b_lo;
    let hihi = a_hi * b_hi;

    // The sum of the cross products is `HALF_BITS` positions up.
    let (mid, mid_carry) = lohi.overflowing_add(hilo);
    let (lo, lo_carry) = lolo.overflowing_add(mid << HALF_BITS);
    let hi = hihi
        + (mid >> HALF_BITS)
        + ((mid_carry as Limb) << HALF_BITS)
        + lo_carry as Limb;
    (lo, hi)
}

/// Sets a = a + b + carry, and returns the new carry.
#[inline(always)]
pub fn adc_assign(a: &mut Limb, b: Limb, carry: bool) -> bool {
    let (sum, carry1) = a.overflowing_add(b);
    let (sum, carry2) = sum.overflowing_add(Limb::from(carry));
    *a = sum;
    carry1 | carry2
}

/// Sets a = a - b - borrow, and returns the borrow.
#[inline(always)]
pub fn sbb_assign(a: &mut Limb, b: Limb, borrow: bool) -> bool {
    let (sub, borrow1) = a.overflowing_sub(b);
    let (sub, borrow2) = sub.overflowing_sub(Limb::from(borrow));
    *a = sub;
    borrow1 | borrow2
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn check_widening_mul() {
        proptest!(|(a: Limb, b: Limb)| {
            let (lo, hi) = widening_mul(a, b);
            let expected = u128::from(a) * u128::from(b);
            prop_assert_eq!(lo, expected as Limb);
            prop_assert_eq!(hi, (expected >> LIMB_BITS) as Limb);
        });
    }

    #[test]
    fn widening_mul_max() {
        let (lo, hi) = widening_mul(Limb::MAX, Limb::MAX);
        assert_eq!(lo, 1);
        assert_eq!(hi, Limb::MAX - 1);
    }

    #[test]
    fn adc_assign_carries() {
        let mut a = Limb::MAX;
        assert!(adc_assign(&mut a, 0, true));
        assert_eq!(a, 0);

        let mut a = 5;
        assert!(!adc_assign(&mut a, 6, true));
        assert_eq!(a, 12);
    }

    #[test]
    fn sbb_assign_borrows() {
        let mut a = 0;
        assert!(sbb_assign(&mut a, 0, true));
        assert_eq!(a, Limb::MAX);

        let mut a = 12;
        assert!(!sbb_assign(&mut a, 6, true));
        assert_eq!(a, 5);
    }
}
