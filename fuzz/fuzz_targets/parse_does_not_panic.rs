#![no_main]
use libfuzzer_sys::fuzz_target;
use openzeppelin_bignum::DynUint;

fuzz_target!(|text: &str| {
    let decimal = DynUint::parse_decimal(text);
    let hex = DynUint::parse_hex(text);
    assert!(decimal.num_limbs() <= decimal.capacity());
    assert!(hex.num_limbs() <= hex.capacity());
});
