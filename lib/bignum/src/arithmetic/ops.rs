//! Increment, decrement, addition and subtraction of [`DynUint`]s.

use core::{
    borrow::Borrow,
    ops::{Add, AddAssign},
};

use num_traits::Zero;

use crate::{
    arithmetic::{
        limb::{self, Limb},
        uint::DynUint,
    },
    error::{Error, Result},
};

impl DynUint {
    /// Add one to `self` in-place.
    pub fn increment(&mut self) {
        let carry = self.as_limbs_mut().iter_mut().all(|limb| {
            *limb = limb.wrapping_add(1);
            *limb == 0
        });
        if carry {
            self.push_carry();
        }
    }

    /// Subtract one from `self` in-place.
    ///
    /// Decrementing zero leaves zero.
    pub fn decrement(&mut self) {
        if self.is_zero() {
            return;
        }
        for limb in self.as_limbs_mut() {
            let borrow = *limb == 0;
            *limb = limb.wrapping_sub(1);
            if !borrow {
                break;
            }
        }
        self.autoscale();
    }

    /// Add a single-word `rhs` to `self` in-place.
    pub fn add_limb_assign(&mut self, rhs: Limb) {
        self.add_limbs_assign(&[rhs]);
    }

    /// Add little-endian `rhs` limbs to `self` in-place.
    pub(crate) fn add_limbs_assign(&mut self, rhs: &[Limb]) {
        if self.num_limbs() < rhs.len() {
            self.scale(rhs.len());
        }

        let mut carry = false;
        let (low, high) = self.as_limbs_mut().split_at_mut(rhs.len());
        for (a, &b) in low.iter_mut().zip(rhs) {
            carry = limb::adc_assign(a, b, carry);
        }
        for a in high {
            if !carry {
                break;
            }
            carry = limb::adc_assign(a, 0, carry);
        }
        if carry {
            self.push_carry();
        }
        // `rhs` may carry high zero limbs.
        self.autoscale();
    }

    /// Grow `self` by one limb holding an escaped carry.
    fn push_carry(&mut self) {
        let len = self.num_limbs();
        self.scale(len + 1);
        self.as_limbs_mut()[len] = 1;
    }

    /// Subtract `rhs` from `self`, returning the difference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `rhs` is greater than `self`.
    pub fn checked_sub(&self, rhs: &DynUint) -> Result<DynUint> {
        let mut diff = self.clone();
        if diff.sub_limbs_assign(rhs.as_limbs()) {
            Ok(diff)
        } else {
            tracing::debug!(
                minuend_bits = self.num_bits(),
                subtrahend_bits = rhs.num_bits(),
                "subtraction underflow"
            );
            Err(Error::Underflow)
        }
    }

    /// Subtract `rhs` from `self` in-place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `rhs` is greater than `self`, leaving
    /// `self` unchanged.
    pub fn checked_sub_assign(&mut self, rhs: &DynUint) -> Result<()> {
        if *self < *rhs {
            tracing::debug!(
                minuend_bits = self.num_bits(),
                subtrahend_bits = rhs.num_bits(),
                "subtraction underflow"
            );
            return Err(Error::Underflow);
        }
        let no_underflow = self.sub_limbs_assign(rhs.as_limbs());
        debug_assert!(no_underflow, "minuend was checked to be not less");
        Ok(())
    }

    /// Subtract a single-word `rhs` from `self` in-place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `rhs` is greater than `self`, leaving
    /// `self` unchanged.
    pub fn checked_sub_limb_assign(&mut self, rhs: Limb) -> Result<()> {
        if self.cmp_limb(rhs).is_lt() {
            tracing::debug!(subtrahend = rhs, "subtraction underflow");
            return Err(Error::Underflow);
        }
        let mut borrow = false;
        for (i, a) in self.as_limbs_mut().iter_mut().enumerate() {
            let b = if i == 0 { rhs } else { 0 };
            borrow = limb::sbb_assign(a, b, borrow);
            if i > 0 && !borrow {
                break;
            }
        }
        self.autoscale();
        Ok(())
    }

    /// Subtract little-endian `rhs` limbs from `self` in-place.
    ///
    /// Adds the two's complement of `rhs`, padded to the length of `self`.
    /// Returns the final carry, which is `false` exactly when `rhs` was
    /// greater than `self` and the result wrapped around.
    pub(crate) fn sub_limbs_assign(&mut self, rhs: &[Limb]) -> bool {
        let rhs = trim_limbs(rhs);
        if rhs.len() > self.num_limbs() {
            return false;
        }

        let mut carry = true;
        for (i, a) in self.as_limbs_mut().iter_mut().enumerate() {
            let b = rhs.get(i).copied().unwrap_or(0);
            carry = limb::adc_assign(a, !b, carry);
        }
        self.autoscale();
        carry
    }
}

/// Strip high zero limbs, leaving an empty slice for zero.
pub(crate) fn trim_limbs(limbs: &[Limb]) -> &[Limb] {
    let significant = limbs.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1);
    &limbs[..significant]
}

impl<B: Borrow<DynUint>> AddAssign<B> for DynUint {
    fn add_assign(&mut self, rhs: B) {
        self.add_limbs_assign(rhs.borrow().as_limbs());
    }
}

impl<B: Borrow<DynUint>> Add<B> for DynUint {
    type Output = DynUint;

    fn add(mut self, rhs: B) -> Self::Output {
        self += rhs;
        self
    }
}

impl<B: Borrow<DynUint>> Add<B> for &DynUint {
    type Output = DynUint;

    /// Add `rhs` to `self`, cloning the longer operand into the sum.
    fn add(self, rhs: B) -> Self::Output {
        let rhs = rhs.borrow();
        let (longer, shorter) = if self.num_limbs() >= rhs.num_limbs() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut sum = longer.clone();
        sum.add_limbs_assign(shorter.as_limbs());
        sum
    }
}

impl Zero for DynUint {
    fn zero() -> Self {
        DynUint::new()
    }

    fn is_zero(&self) -> bool {
        DynUint::is_zero(self)
    }

    fn set_zero(&mut self) {
        DynUint::set_zero(self);
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use crate::{
        arithmetic::{limb::Limb, uint::DynUint},
        error::Error,
    };

    fn reference(uint: &DynUint) -> BigUint {
        BigUint::from_bytes_le(&uint.clone().into_bytes_le())
    }

    #[test]
    fn increment_carries_into_new_limb() {
        let mut uint = DynUint::from_limbs(&[Limb::MAX, Limb::MAX]);
        uint.increment();
        assert_eq!(uint.as_limbs(), &[0, 0, 1]);

        let mut uint = DynUint::new();
        uint.increment();
        assert_eq!(uint, 1u64);
    }

    #[test]
    fn increment_grows_past_capacity() {
        let mut uint = DynUint::from_limbs(&[Limb::MAX; 4]);
        assert_eq!(uint.capacity(), 4);
        uint.increment();
        assert_eq!(uint.num_limbs(), 5);
        assert_eq!(uint.capacity(), 8);
        assert_eq!(uint.as_limbs(), &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn decrement_borrows_and_shrinks() {
        let mut uint = DynUint::from_limbs(&[0, 0, 1]);
        uint.decrement();
        assert_eq!(uint.as_limbs(), &[Limb::MAX, Limb::MAX]);

        let mut uint = DynUint::from(1u64);
        uint.decrement();
        assert!(uint.is_zero());
    }

    #[test]
    fn decrement_zero_is_noop() {
        let mut uint = DynUint::new();
        uint.decrement();
        assert!(uint.is_zero());
        assert_eq!(uint.num_limbs(), 1);
    }

    #[test]
    fn add_scenario() {
        let a = from_num!("100000002000000000000000");
        let b = from_num!("3000000000000002");
        assert_eq!((&a + &b).to_decimal_string(), "100000005000000000000002");
        assert_eq!((&b + &a).to_decimal_string(), "100000005000000000000002");
    }

    #[test]
    fn sub_scenario() {
        let a = from_num!("100000005000000000000002");
        let b = from_num!("3000000000000002");
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.to_decimal_string(), "100000002000000000000000");
    }

    #[test]
    fn add_carry_escapes_top_limb() {
        let a = DynUint::from_limbs(&[Limb::MAX, Limb::MAX]);
        let b = DynUint::from(1u64);
        assert_eq!((&a + &b).as_limbs(), &[0, 0, 1]);
    }

    #[test]
    fn add_zero_is_identity() {
        proptest!(|(limbs in prop::collection::vec(any::<Limb>(), 1..8))| {
            let a = DynUint::from_limbs(&limbs);
            prop_assert_eq!(&a + &DynUint::new(), a.clone());
            prop_assert_eq!(&DynUint::new() + &a, a);
        });
    }

    #[test]
    fn add_is_monotonic() {
        proptest!(|(
            a in prop::collection::vec(any::<Limb>(), 1..8),
            b in prop::collection::vec(any::<Limb>(), 1..8)
        )| {
            let a = DynUint::from_limbs(&a);
            let b = DynUint::from_limbs(&b);
            let sum = &a + &b;
            prop_assert!(sum >= a);
            prop_assert_eq!(sum == a, b.is_zero());
        });
    }

    #[test]
    fn add_matches_reference() {
        proptest!(|(
            a in prop::collection::vec(any::<Limb>(), 1..8),
            b in prop::collection::vec(any::<Limb>(), 1..8)
        )| {
            let a = DynUint::from_limbs(&a);
            let b = DynUint::from_limbs(&b);
            let expected = reference(&a) + reference(&b);

            prop_assert_eq!(reference(&(&a + &b)), expected.clone());

            let mut sum = a.clone();
            sum += &b;
            prop_assert_eq!(reference(&sum), expected);
        });
    }

    #[test]
    fn sub_then_add_roundtrip() {
        proptest!(|(
            a in prop::collection::vec(any::<Limb>(), 1..8),
            b in prop::collection::vec(any::<Limb>(), 1..8)
        )| {
            let (a, b) = {
                let a = DynUint::from_limbs(&a);
                let b = DynUint::from_limbs(&b);
                if a >= b { (a, b) } else { (b, a) }
            };
            let diff = a.checked_sub(&b).unwrap();
            prop_assert_eq!(reference(&diff), reference(&a) - reference(&b));
            prop_assert_eq!(&diff + &b, a.clone());

            let mut in_place = a.clone();
            in_place.checked_sub_assign(&b).unwrap();
            prop_assert_eq!(in_place, diff);
        });
    }

    #[test]
    fn sub_underflow_fails() {
        proptest!(|(
            a in prop::collection::vec(any::<Limb>(), 1..8),
            b in prop::collection::vec(any::<Limb>(), 1..8)
        )| {
            let (a, b) = {
                let a = DynUint::from_limbs(&a);
                let b = DynUint::from_limbs(&b);
                if a < b { (a, b) } else { (b, a) }
            };
            prop_assume!(a != b);
            prop_assert_eq!(a.checked_sub(&b), Err(Error::Underflow));

            let mut unchanged = a.clone();
            prop_assert_eq!(unchanged.checked_sub_assign(&b), Err(Error::Underflow));
            prop_assert_eq!(unchanged, a);
        });
    }

    #[test]
    fn sub_equal_is_zero() {
        let a = DynUint::from_limbs(&[1, 2, 3]);
        let diff = a.checked_sub(&a.clone()).unwrap();
        assert!(diff.is_zero());
        assert_eq!(diff.num_limbs(), 1);
    }

    #[test]
    fn limb_add_and_sub() {
        let mut uint = DynUint::from_limbs(&[Limb::MAX, Limb::MAX]);
        uint.add_limb_assign(2);
        assert_eq!(uint.as_limbs(), &[1, 0, 1]);

        uint.checked_sub_limb_assign(2).unwrap();
        assert_eq!(uint.as_limbs(), &[Limb::MAX, Limb::MAX]);

        let mut small = DynUint::from(3u64);
        assert_eq!(small.checked_sub_limb_assign(4), Err(Error::Underflow));
        assert_eq!(small, 3u64);
        small.checked_sub_limb_assign(3).unwrap();
        assert!(small.is_zero());
    }
}
