//! This module contains the [`DynUint`] unsigned big integer, a
//! heap-allocated magnitude that grows and shrinks with its value.

use alloc::{vec, vec::Vec};
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use zeroize::Zeroize;

use crate::{
    arithmetic::limb::{Limb, LIMB_BITS},
    bits::BitIteratorBE,
};

/// Number of limbs allocated for the smallest [`DynUint`] (256 bits).
pub const BASE_CAPACITY: usize = 256 / LIMB_BITS;

/// Heap-allocated big unsigned integer.
///
/// Stores a little-endian sequence of [`Limb`]s. The allocated words form the
/// capacity, while `len` counts the significant ones:
///
/// - `1 <= len <= capacity`.
/// - The word at `len - 1` is non-zero, unless the value is zero, which is
///   represented by a single zero word.
/// - Every word in `len..capacity` is zero.
/// - Capacity is [`BASE_CAPACITY`] times a power of two.
pub struct DynUint {
    limbs: Vec<Limb>,
    len: usize,
}

impl DynUint {
    /// Create a new [`DynUint`] equal to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_len(1)
    }

    /// Create a zero-filled [`DynUint`] of `len` limbs.
    ///
    /// Capacity is the smallest power-of-two multiple of [`BASE_CAPACITY`]
    /// holding `len` limbs. The result is not normalized until a
    /// non-zero top limb is written or [`Self::autoscale`] runs.
    pub(crate) fn with_len(len: usize) -> Self {
        let len = len.max(1);
        Self { limbs: vec![0; grown_capacity(BASE_CAPACITY, len)], len }
    }

    /// Create a [`DynUint`] from little-endian `limbs`.
    #[must_use]
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        let mut uint = Self::with_len(limbs.len());
        uint.limbs[..limbs.len()].copy_from_slice(limbs);
        uint.autoscale();
        uint
    }

    /// Returns the significant limbs in little-endian order.
    ///
    /// Zero is a single zero limb.
    #[must_use]
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs[..self.len]
    }

    /// Returns the significant limbs for in-place modification.
    pub(crate) fn as_limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs[..self.len]
    }

    /// Number of significant limbs.
    #[must_use]
    pub fn num_limbs(&self) -> usize {
        self.len
    }

    /// Number of allocated limbs.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// Resize `self` to `new_len` significant limbs.
    ///
    /// Capacity doubles until it holds `new_len` limbs. Limbs dropped by a
    /// shrink are zeroed, so they never resurface on a later growth.
    pub(crate) fn scale(&mut self, new_len: usize) {
        let new_len = new_len.max(1);
        if new_len > self.capacity() {
            let capacity = grown_capacity(self.capacity(), new_len);
            self.limbs.resize(capacity, 0);
        }
        if new_len > self.len {
            self.limbs[self.len..new_len].fill(0);
        } else {
            self.limbs[new_len..self.len].fill(0);
        }
        self.len = new_len;
    }

    /// Recompute the number of significant limbs from the top of the
    /// allocation down.
    pub(crate) fn autoscale(&mut self) {
        self.len = self.limbs.iter().rposition(|&limb| limb != 0).map_or(1, |i| i + 1);
    }

    /// Reset `self` to zero, keeping its allocation.
    pub(crate) fn set_zero(&mut self) {
        self.scale(1);
        self.limbs[0] = 0;
    }

    /// Returns true if this number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_limbs().iter().all(|&limb| limb == 0)
    }

    /// Returns true if this number is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Returns true if this number is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Return the minimum number of bits needed to encode this number.
    #[must_use]
    pub fn num_bits(&self) -> usize {
        match self.as_limbs().iter().rposition(|&limb| limb != 0) {
            Some(top) => {
                top * LIMB_BITS
                    + (LIMB_BITS - self.limbs[top].leading_zeros() as usize)
            }
            None => 0,
        }
    }

    /// Find the `i`-th bit of `self`.
    #[must_use]
    pub fn get_bit(&self, i: usize) -> bool {
        let limb = i / LIMB_BITS;
        let bit = i % LIMB_BITS;
        self.as_limbs().get(limb).is_some_and(|limb| limb & (1 << bit) != 0)
    }

    /// Compare `self` with a single-word `rhs`.
    #[must_use]
    pub fn cmp_limb(&self, rhs: Limb) -> Ordering {
        if self.as_limbs()[1..].iter().any(|&limb| limb != 0) {
            return Ordering::Greater;
        }
        self.limbs[0].cmp(&rhs)
    }

    /// Create a [`DynUint`] from little-endian bytes of any length.
    #[must_use]
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        const LIMB_BYTES: usize = LIMB_BITS / 8;

        let limbs: Vec<Limb> = bytes
            .chunks(LIMB_BYTES)
            .map(|chunk| {
                let mut buf = [0u8; LIMB_BYTES];
                buf[..chunk.len()].copy_from_slice(chunk);
                Limb::from_le_bytes(buf)
            })
            .collect();
        Self::from_limbs(&limbs)
    }

    /// Convert `self` to little-endian bytes, without trailing zero bytes.
    ///
    /// Zero is encoded as a single zero byte.
    #[must_use]
    pub fn into_bytes_le(self) -> Vec<u8> {
        let mut bytes: Vec<u8> =
            self.as_limbs().iter().flat_map(|&limb| limb.to_le_bytes()).collect();
        let significant =
            bytes.iter().rposition(|&byte| byte != 0).map_or(1, |i| i + 1);
        bytes.truncate(significant);
        bytes
    }
}

/// Double `capacity` until it holds `len` limbs.
fn grown_capacity(mut capacity: usize, len: usize) -> usize {
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

// ----------- From Impls -----------

/// From traits implementation for primitives that fit into a [`Limb`].
macro_rules! impl_from_primitive {
    ($int:ty) => {
        impl From<$int> for DynUint {
            #[inline]
            #[allow(clippy::cast_lossless)]
            fn from(val: $int) -> DynUint {
                let mut repr = DynUint::new();
                repr.limbs[0] = val as Limb;
                repr
            }
        }
    };
}

impl_from_primitive!(u8);
impl_from_primitive!(u16);
impl_from_primitive!(u32);
impl_from_primitive!(u64);
impl_from_primitive!(usize);

// Logic for `u128` conversion is different from `u8`..`u64`, due to the size of
// the `Limb`.
impl From<u128> for DynUint {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(val: u128) -> DynUint {
        DynUint::from_limbs(&[val as Limb, (val >> LIMB_BITS) as Limb])
    }
}

// ----------- Traits Impls -----------

impl Default for DynUint {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynUint {
    fn clone(&self) -> Self {
        Self { limbs: self.limbs.clone(), len: self.len }
    }
}

impl Ord for DynUint {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        // Excess words of the longer operand decide only when non-zero.
        let (shorter, excess, longer_is_self) = if self.len >= rhs.len {
            (rhs.len, &self.limbs[rhs.len..self.len], true)
        } else {
            (self.len, &rhs.limbs[self.len..rhs.len], false)
        };
        if excess.iter().any(|&limb| limb != 0) {
            return if longer_is_self {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        for (a, b) in self.limbs[..shorter]
            .iter()
            .rev()
            .zip(rhs.limbs[..shorter].iter().rev())
        {
            match a.cmp(b) {
                Ordering::Equal => {}
                order => return order,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for DynUint {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl PartialEq for DynUint {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for DynUint {}

impl PartialEq<Limb> for DynUint {
    fn eq(&self, rhs: &Limb) -> bool {
        self.cmp_limb(*rhs) == Ordering::Equal
    }
}

impl PartialOrd<Limb> for DynUint {
    fn partial_cmp(&self, rhs: &Limb) -> Option<Ordering> {
        Some(self.cmp_limb(*rhs))
    }
}

impl Hash for DynUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let significant =
            self.limbs.iter().rposition(|&limb| limb != 0).map_or(1, |i| i + 1);
        self.limbs[..significant].hash(state);
    }
}

impl Zeroize for DynUint {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.limbs.resize(BASE_CAPACITY, 0);
        self.len = 1;
    }
}

impl AsRef<[Limb]> for DynUint {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl BitIteratorBE for DynUint {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.as_limbs().iter().rev().flat_map(Limb::bit_be_iter)
    }
}
