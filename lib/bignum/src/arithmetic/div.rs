//! Long division of [`DynUint`]s.

use crate::{
    arithmetic::uint::DynUint,
    error::{Error, Result},
};

impl DynUint {
    /// Divide `self` by `divisor`, returning the quotient and the remainder.
    ///
    /// Basic shift-and-subtract division algorithm based on [wiki]. Runs in
    /// time proportional to the bit length of `self` times the limb length
    /// of the operands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/Division_algorithm
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(dividend_bits = self.num_bits(), divisor_bits = divisor.num_bits())
    )]
    pub fn div_rem(&self, divisor: &DynUint) -> Result<(DynUint, DynUint)> {
        if divisor.is_zero() {
            tracing::debug!("division by zero");
            return Err(Error::DivisionByZero);
        }

        let mut scaled_divisor = divisor.clone();
        let mut multiple = DynUint::from(1u64);

        // Scale the divisor up to the dividend's bit length in one step,
        // then by single bits until it is not less than the dividend.
        let shift = self.num_bits().saturating_sub(divisor.num_bits());
        scaled_divisor <<= shift;
        multiple <<= shift;
        while scaled_divisor < *self {
            scaled_divisor <<= 1;
            multiple <<= 1;
        }

        let mut quotient = DynUint::new();
        let mut remainder = self.clone();
        loop {
            if remainder >= scaled_divisor {
                let no_underflow =
                    remainder.sub_limbs_assign(scaled_divisor.as_limbs());
                debug_assert!(no_underflow, "remainder was checked to be not less");
                quotient += &multiple;
            }
            scaled_divisor >>= 1;
            multiple >>= 1;
            if multiple.is_zero() {
                break;
            }
        }

        Ok((quotient, remainder))
    }

    /// Divide `self` by `divisor`, returning the quotient only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &DynUint) -> Result<DynUint> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Compute the remainder of division `self` by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &DynUint) -> Result<DynUint> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
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
    fn div_rem_small() {
        let (quotient, remainder) =
            DynUint::from(100u64).div_rem(&DynUint::from(7u64)).unwrap();
        assert_eq!(quotient.to_decimal_string(), "14");
        assert_eq!(remainder.to_decimal_string(), "2");
    }

    #[test]
    fn div_rem_wide() {
        let dividend: DynUint = from_num!("43129923721897334698312931");
        let divisor: DynUint = from_num!("375923422");
        let remainder = dividend.checked_rem(&divisor).unwrap();
        assert_eq!(remainder.to_decimal_string(), "216456157");

        let quotient = dividend.checked_div(&divisor).unwrap();
        assert_eq!(
            &(&quotient * &divisor) + &remainder,
            dividend
        );
    }

    #[test]
    fn div_rem_dividend_smaller_than_divisor() {
        let (quotient, remainder) =
            DynUint::from(3u64).div_rem(&DynUint::from_limbs(&[0, 1])).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, 3u64);

        let (quotient, remainder) =
            DynUint::new().div_rem(&DynUint::from(9u64)).unwrap();
        assert!(quotient.is_zero());
        assert!(remainder.is_zero());
    }

    #[test]
    fn div_rem_exact() {
        let divisor = DynUint::from_limbs(&[Limb::MAX, 3]);
        let dividend = &divisor * DynUint::from_limbs(&[17, 0, 5]);
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(quotient.as_limbs(), &[17, 0, 5]);
        assert!(remainder.is_zero());
    }

    #[test]
    fn div_by_zero_fails() {
        proptest!(|(limbs in prop::collection::vec(any::<Limb>(), 1..6))| {
            let dividend = DynUint::from_limbs(&limbs);
            prop_assert_eq!(
                dividend.div_rem(&DynUint::new()),
                Err(Error::DivisionByZero)
            );
            prop_assert_eq!(
                dividend.checked_div(&DynUint::new()),
                Err(Error::DivisionByZero)
            );
        });
    }

    #[test]
    fn div_rem_identity() {
        proptest!(|(
            a in prop::collection::vec(any::<Limb>(), 1..6),
            d in prop::collection::vec(any::<Limb>(), 1..4)
        )| {
            let dividend = DynUint::from_limbs(&a);
            let divisor = DynUint::from_limbs(&d);
            prop_assume!(!divisor.is_zero());

            let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
            prop_assert!(remainder < divisor);
            prop_assert_eq!(&(&quotient * &divisor) + &remainder, dividend.clone());

            prop_assert_eq!(reference(&quotient), reference(&dividend) / reference(&divisor));
            prop_assert_eq!(reference(&remainder), reference(&dividend) % reference(&divisor));
        });
    }
}
