/*!
Arbitrary-precision unsigned integer arithmetic.

> Note that `bignum` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must depend
> on `bignum`, we recommend pinning to a specific version, i.e., `=0.y.z`.

## Dynamically Sized Integers

[`DynUint`] is a heap-allocated, growable counterpart to fixed-width integer
types. It stores a little-endian sequence of [`Limb`]s and provides:

- Increment, decrement, addition and checked subtraction.
- Karatsuba multiplication on top of a half-word single-limb product.
- Shift-and-subtract long division with remainder.
- Decimal and hexadecimal parsing and rendering, with decimal conversion done
  by a [double dabble] scan over a binary-coded decimal buffer.

```
use openzeppelin_bignum::{from_num, DynUint};

let a: DynUint = from_num!("100000002000000000000000");
let b: DynUint = from_num!("3000000000000002");
assert_eq!((&a + &b).to_decimal_string(), "100000005000000000000002");

let (quotient, remainder) = from_num!("100").div_rem(&DynUint::from(7u64)).unwrap();
assert_eq!(quotient, 14u64);
assert_eq!(remainder, 2u64);
```

[double dabble]: https://en.wikipedia.org/wiki/Double_dabble

*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]
extern crate alloc;
extern crate core;

#[macro_use]
pub mod arithmetic;
pub mod bits;
pub mod error;

pub use arithmetic::{limb::Limb, uint::DynUint};
pub use error::{Error, Result};
