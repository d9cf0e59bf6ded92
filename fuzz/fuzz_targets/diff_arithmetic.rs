#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use openzeppelin_bignum::DynUint;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = usize::from(data[0]) % data.len();
    let (lhs, rhs) = data[1..].split_at(split.min(data.len() - 1));
    let a = DynUint::from_bytes_le(lhs);
    let b = DynUint::from_bytes_le(rhs);
    let ref_a = BigUint::from_bytes_le(lhs);
    let ref_b = BigUint::from_bytes_le(rhs);

    let sum = &a + &b;
    assert_eq!(BigUint::from_bytes_le(&sum.into_bytes_le()), &ref_a + &ref_b);

    let product = &a * &b;
    assert_eq!(BigUint::from_bytes_le(&product.into_bytes_le()), &ref_a * &ref_b);

    match a.checked_sub(&b) {
        Ok(difference) => {
            assert!(ref_a >= ref_b);
            assert_eq!(BigUint::from_bytes_le(&difference.into_bytes_le()), &ref_a - &ref_b);
        }
        Err(_) => assert!(ref_a < ref_b),
    }

    let shift = usize::from(data[0]);
    let shifted = a.clone() << shift;
    assert_eq!(BigUint::from_bytes_le(&shifted.into_bytes_le()), &ref_a << shift);
    let shifted = a >> shift;
    assert_eq!(BigUint::from_bytes_le(&shifted.into_bytes_le()), &ref_a >> shift);
});
