#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use openzeppelin_bignum::{DynUint, Error};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = usize::from(data[0]) % data.len();
    let (dividend, divisor) = data[1..].split_at(split.min(data.len() - 1));
    let a = DynUint::from_bytes_le(dividend);
    let d = DynUint::from_bytes_le(divisor);

    match a.div_rem(&d) {
        Ok((quotient, remainder)) => {
            let ref_a = BigUint::from_bytes_le(dividend);
            let ref_d = BigUint::from_bytes_le(divisor);
            assert!(remainder < d);
            assert_eq!(BigUint::from_bytes_le(&quotient.into_bytes_le()), &ref_a / &ref_d);
            assert_eq!(BigUint::from_bytes_le(&remainder.into_bytes_le()), &ref_a % &ref_d);
        }
        Err(err) => {
            assert_eq!(err, Error::DivisionByZero);
            assert!(d.is_zero());
        }
    }
});
