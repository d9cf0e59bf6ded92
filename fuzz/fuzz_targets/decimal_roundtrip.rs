#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use openzeppelin_bignum::DynUint;

fuzz_target!(|data: &[u8]| {
    let uint = DynUint::from_bytes_le(data);
    let reference = BigUint::from_bytes_le(data);

    let decimal = uint.to_decimal_string();
    assert_eq!(decimal, reference.to_str_radix(10));
    assert_eq!(DynUint::parse_decimal(&decimal), uint);

    let hex = format!("{uint:#x}");
    assert_eq!(DynUint::parse_hex(&hex), uint);
});
