// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underlying integer storage for flag types.

use core::fmt::{Debug, LowerHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor};

/// Integer type backing a flag type.
///
/// The bit width bounds how many flags a [`FlagSpec`](crate::FlagSpec) may hold.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + LowerHex
    + Default
    + Send
    + Sync
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + 'static
{
    /// Number of bits in the integer.
    const BITS: u32;
    /// The all-zero value.
    const ZERO: Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Widens the value for diagnostics.
    fn to_u64(self) -> u64;

    /// Value with only bit `n` set.
    ///
    /// `n` must be less than [`Self::BITS`].
    fn bit(n: u32) -> Self;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn bit(n: u32) -> Self {
                debug_assert!(n < Self::BITS, "bit index {n} out of range");
                1 << n
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64);
