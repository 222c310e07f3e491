// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sets of flags of a single type.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::str::FromStr;

use crate::bits::Bits;
use crate::error::FlagError;
use crate::spec::FlagType;

/// A bitwise-combinable set of flags of type `F`.
///
/// The default value is the empty set.
/// A set is "truthy" when [`FlagSet::any`] returns true.
///
/// Complement ([`Not`]) is relative to the registry: `!set` holds every flag
/// registered in [`F::spec()`](FlagType::spec) that `set` does not contain.
/// It is not an arithmetic bit complement, so unregistered bits never appear.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlagSet<F: FlagType> {
    bits: F::Bits,
    _marker: PhantomData<F>,
}

impl<F: FlagType> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: FlagType> FlagSet<F> {
    /// The empty set.
    pub fn empty() -> Self {
        Self::from_bits(F::Bits::ZERO)
    }

    /// Build a set holding `flag`, which must be registered.
    pub fn try_from_flag(flag: F) -> Result<Self, FlagError> {
        if F::spec().contains(flag) {
            Ok(Self::from_bits(flag.to_bits()))
        } else {
            Err(FlagError::UnknownFlag {
                type_name: F::NAME,
                value: flag.to_bits().to_u64(),
            })
        }
    }

    /// Build a set holding `flag`.
    ///
    /// # Panics
    ///
    /// If `flag` is not registered. Use [`FlagSet::try_from_flag`] (or
    /// `TryFrom`) for flags built with `try_new` at runtime.
    #[track_caller]
    pub fn of(flag: F) -> Self {
        match Self::try_from_flag(flag) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    fn from_bits(bits: F::Bits) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// Raw storage. Only meaningful for hashing or ordering.
    pub fn bits(self) -> F::Bits {
        self.bits
    }

    /// Returns true if `flag` is in the set.
    ///
    /// A zero-valued flag is never contained.
    pub fn contains(self, flag: F) -> bool {
        self.bits & flag.to_bits() != F::Bits::ZERO
    }

    /// Returns true if every flag of `other` is in the set.
    pub fn contains_all(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns true if the sets share at least one flag.
    pub fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != F::Bits::ZERO
    }

    /// Returns true if no flag is set.
    pub fn is_empty(self) -> bool {
        self.bits == F::Bits::ZERO
    }

    /// Returns true if at least one flag is set.
    pub fn any(self) -> bool {
        !self.is_empty()
    }

    /// Add `flag`.
    ///
    /// # Panics
    ///
    /// If `flag` is not registered.
    #[track_caller]
    pub fn insert(&mut self, flag: F) {
        self.bits = self.bits | Self::of(flag).bits;
    }

    /// Remove `flag` if present.
    pub fn remove(&mut self, flag: F) {
        let present = self.bits & flag.to_bits();
        self.bits = self.bits ^ present;
    }

    /// Iterate the flags in the set from the lowest bit up.
    pub fn iter(self) -> impl Iterator<Item = F> {
        (0..F::Bits::BITS)
            .map(F::Bits::bit)
            .filter(move |b| self.bits & *b != F::Bits::ZERO)
            .map(F::from_bits_unchecked)
    }
}

/// A single flag or a set of flags of type `F`.
///
/// The operators and the window APIs that take "flags" accept either.
/// [`flag_type!`](crate::flag_type) implements this for the declared type,
/// together with `TryFrom<Flag> for FlagSet<Flag>` for the non-panicking
/// conversion.
pub trait IntoFlagSet<F: FlagType> {
    /// Convert into a set.
    ///
    /// # Panics
    ///
    /// For a single flag, if it is not registered in [`F::spec()`](FlagType::spec).
    /// Built-in constants are always registered.
    fn into_flag_set(self) -> FlagSet<F>;
}

impl<F: FlagType> IntoFlagSet<F> for FlagSet<F> {
    fn into_flag_set(self) -> Self {
        self
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitOr<R> for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: R) -> Self {
        Self::from_bits(self.bits | rhs.into_flag_set().bits)
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitAnd<R> for FlagSet<F> {
    type Output = Self;

    fn bitand(self, rhs: R) -> Self {
        Self::from_bits(self.bits & rhs.into_flag_set().bits)
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitXor<R> for FlagSet<F> {
    type Output = Self;

    fn bitxor(self, rhs: R) -> Self {
        Self::from_bits(self.bits ^ rhs.into_flag_set().bits)
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitOrAssign<R> for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: R) {
        self.bits = self.bits | rhs.into_flag_set().bits;
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitAndAssign<R> for FlagSet<F> {
    fn bitand_assign(&mut self, rhs: R) {
        self.bits = self.bits & rhs.into_flag_set().bits;
    }
}

impl<F: FlagType, R: IntoFlagSet<F>> BitXorAssign<R> for FlagSet<F> {
    fn bitxor_assign(&mut self, rhs: R) {
        self.bits = self.bits ^ rhs.into_flag_set().bits;
    }
}

impl<F: FlagType> Not for FlagSet<F> {
    type Output = Self;

    fn not(self) -> Self {
        let mut out = Self::empty();
        for flag in F::spec().flags() {
            if !self.contains(flag) {
                out.bits = out.bits | flag.to_bits();
            }
        }
        out
    }
}

/// Writes the set as `A | B | C`, lowest bit first. Bits without a
/// registered name are written in hex.
impl<F: FlagType> fmt::Display for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = F::spec();
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            match spec.to_str(flag) {
                Ok(name) => f.write_str(name)?,
                Err(_) => write!(f, "{:#x}", flag.to_bits())?,
            }
        }
        Ok(())
    }
}

impl<F: FlagType> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet<{}>({self})", F::NAME)
    }
}

/// Parses the format written by [`Display`](fmt::Display). The empty string
/// is the empty set.
impl<F: FlagType> FromStr for FlagSet<F> {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = F::spec();
        let mut out = Self::empty();
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            out.bits = out.bits | spec.from_name(part)?.to_bits();
        }
        Ok(out)
    }
}
