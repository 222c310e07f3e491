// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag registration and lookup failures.

/// Errors raised by flag construction, registration, and name lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    /// A raw value with more than one set bit was used as a single flag.
    #[error("non-bitflag value {value:#x} passed to {type_name}")]
    InvalidFlag {
        /// Name of the flag type.
        type_name: &'static str,
        /// The offending raw value.
        value: u64,
    },
    /// The flag value is already registered.
    #[error("duplicate flag {value:#x} inserted into {type_name} registry")]
    DuplicateFlag {
        /// Name of the flag type.
        type_name: &'static str,
        /// The raw value that was already present.
        value: u64,
    },
    /// The flag name is already registered.
    #[error("duplicate flag name {name:?} inserted into {type_name} registry")]
    DuplicateName {
        /// Name of the flag type.
        type_name: &'static str,
        /// The name that was already present.
        name: &'static str,
    },
    /// The registry already holds as many flags as the integer has bits.
    #[error("{type_name} registry is full ({capacity} flags)")]
    CapacityExceeded {
        /// Name of the flag type.
        type_name: &'static str,
        /// Maximum number of flags.
        capacity: usize,
    },
    /// A flag was used that is not present in the registry.
    #[error("unknown {type_name} flag with value {value:#x}")]
    UnknownFlag {
        /// Name of the flag type.
        type_name: &'static str,
        /// The raw value that was looked up.
        value: u64,
    },
    /// A name was looked up that no registered flag carries.
    #[error("no {type_name} flag named {name:?}")]
    UnknownString {
        /// Name of the flag type.
        type_name: &'static str,
        /// The name that was looked up.
        name: String,
    },
}
