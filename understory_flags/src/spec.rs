// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-type flag registry.

use core::fmt;
use core::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::bits::Bits;
use crate::error::FlagError;

/// A single-bit flag value of a particular flag type.
///
/// Implemented by types declared with [`flag_type!`](crate::flag_type).
/// Each implementor owns one process-wide [`FlagSpec`], reachable through
/// [`FlagType::spec`], which names every known flag of that type.
pub trait FlagType: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Integer storage for the flag and for [`FlagSet`](crate::FlagSet)s of it.
    type Bits: Bits;

    /// Name of the flag type, used in diagnostics.
    const NAME: &'static str;

    /// Returns the raw value.
    fn to_bits(self) -> Self::Bits;

    /// Wraps a raw value without validation.
    ///
    /// Callers must pass a value with at most one set bit.
    fn from_bits_unchecked(bits: Self::Bits) -> Self;

    /// The process-wide registry for this flag type.
    fn spec() -> &'static FlagSpec<Self>;
}

/// Ordered registry mapping flag values of one type to their names.
///
/// A registry holds at most as many flags as [`FlagType::Bits`] has bits,
/// and never two entries with the same value or the same name.
/// Lookups are linear; registries are small.
///
/// The registry returned by [`FlagType::spec`] is created lazily on first use,
/// seeded with the constants declared in [`flag_type!`](crate::flag_type), and
/// lives for the rest of the process. Additional flags may be registered later
/// with [`FlagSpec::insert`]; there is no removal.
pub struct FlagSpec<F: FlagType> {
    entries: RwLock<Vec<(F, &'static str)>>,
}

impl<F: FlagType> Default for FlagSpec<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FlagType> fmt::Debug for FlagSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.read();
        f.debug_struct("FlagSpec")
            .field("type", &F::NAME)
            .field("names", &entries.iter().map(|(_, n)| *n).collect::<Vec<_>>())
            .finish()
    }
}

impl<F: FlagType> FlagSpec<F> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry holding `flags`, inserted in order.
    pub fn with_flags(flags: &[(F, &'static str)]) -> Result<Self, FlagError> {
        let spec = Self::new();
        for &(flag, name) in flags {
            spec.insert(flag, name)?;
        }
        Ok(spec)
    }

    /// Create a registry from a built-in table.
    ///
    /// # Panics
    ///
    /// Panics if the table contains a duplicate value or name, or more
    /// entries than the flag type has bits.
    #[track_caller]
    pub fn seeded(flags: &[(F, &'static str)]) -> Self {
        match Self::with_flags(flags) {
            Ok(spec) => spec,
            Err(err) => panic!("invalid built-in flag table: {err}"),
        }
    }

    /// Maximum number of flags this registry can hold.
    pub fn capacity(&self) -> usize {
        F::Bits::BITS as usize
    }

    /// Number of registered flags.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no flags are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns true if `flag` is registered.
    pub fn contains(&self, flag: F) -> bool {
        self.read().iter().any(|(f, _)| *f == flag)
    }

    /// Returns the name `flag` was registered with.
    pub fn to_str(&self, flag: F) -> Result<&'static str, FlagError> {
        self.read()
            .iter()
            .find(|(f, _)| *f == flag)
            .map(|(_, name)| *name)
            .ok_or_else(|| FlagError::UnknownFlag {
                type_name: F::NAME,
                value: flag.to_bits().to_u64(),
            })
    }

    /// Returns the flag registered under `name`.
    pub fn from_name(&self, name: &str) -> Result<F, FlagError> {
        self.read()
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(f, _)| *f)
            .ok_or_else(|| FlagError::UnknownString {
                type_name: F::NAME,
                name: name.into(),
            })
    }

    /// Register `flag` under `name`.
    ///
    /// Fails if the registry is full or if either the value or the name is
    /// already present.
    pub fn insert(&self, flag: F, name: &'static str) -> Result<(), FlagError> {
        let mut entries = self.write();
        if entries.len() >= self.capacity() {
            return Err(FlagError::CapacityExceeded {
                type_name: F::NAME,
                capacity: self.capacity(),
            });
        }
        for (f, n) in entries.iter() {
            if *f == flag {
                return Err(FlagError::DuplicateFlag {
                    type_name: F::NAME,
                    value: flag.to_bits().to_u64(),
                });
            }
            if *n == name {
                return Err(FlagError::DuplicateName {
                    type_name: F::NAME,
                    name,
                });
            }
        }
        entries.push((flag, name));
        Ok(())
    }

    /// Snapshot of every registered flag, in registration order.
    pub fn flags(&self) -> Vec<F> {
        self.read().iter().map(|(f, _)| *f).collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<(F, &'static str)>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<(F, &'static str)>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
