// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flags --heading-base-level=0

//! Understory Flags: type-safe bit flags with a named, per-type registry.
//!
//! Each flag type is a distinct newtype over an integer, so flags of different
//! types never mix. Every flag type owns a registry ([`FlagSpec`]) that maps
//! each known flag to its canonical name. The registry is what makes flags
//! printable and parseable, and it defines the universe used by complement.
//!
//! - [`flag_type!`]: declare a flag type and its built-in flags.
//! - [`FlagSpec`]: the ordered name table; extensible at runtime with [`FlagSpec::insert`].
//! - [`FlagSet`]: a set of flags of one type with `|`, `&`, `^`, and `!`.
//!
//! ## Complement is registry-relative
//!
//! `!set` yields every *registered* flag absent from `set`. Registering an
//! extra flag therefore changes the result of later complements:
//!
//! ```
//! use understory_flags::{FlagSet, FlagType};
//!
//! understory_flags::flag_type! {
//!     /// Window chrome features.
//!     pub struct Chrome: u16 {
//!         /// Has a title bar.
//!         const TITLE = 1 << 0;
//!         /// Has a close button.
//!         const CLOSE = 1 << 1;
//!     }
//! }
//!
//! assert_eq!(!Chrome::TITLE, FlagSet::of(Chrome::CLOSE));
//!
//! // A downstream crate adds its own flag.
//! let minimize = Chrome::try_new(1 << 2).unwrap();
//! Chrome::spec().insert(minimize, "MINIMIZE").unwrap();
//! assert_eq!(!Chrome::TITLE, Chrome::CLOSE | minimize);
//! assert_eq!((Chrome::TITLE | minimize).to_string(), "TITLE | MINIMIZE");
//! ```
//!
//! ## Extending a flag type
//!
//! Registries are process-wide and created on first use. Extra flags should be
//! registered during start-up, before sets containing them are built;
//! [`FlagSet::try_from_flag`] and `FlagSet::try_from` report flags that were
//! never registered, and the operators panic on them.

mod bits;
mod error;
mod macros;
mod set;
mod spec;

pub use bits::Bits;
pub use error::FlagError;
pub use set::{FlagSet, IntoFlagSet};
pub use spec::{FlagSpec, FlagType};

#[cfg(test)]
mod tests {
    use super::*;

    crate::flag_type! {
        /// Three-flag type used by the complement tests.
        struct Tri: u16 {
            /// A.
            const A = 1 << 0;
            /// B.
            const B = 1 << 1;
            /// C.
            const C = 1 << 2;
        }
    }

    crate::flag_type! {
        /// Type whose registry is extended at runtime.
        struct Grow: u8 {
            /// Zero-valued "no flags" entry.
            const NONE = 0;
            /// First.
            const FIRST = 1 << 0;
        }
    }

    crate::flag_type! {
        /// Type whose registry is filled to capacity.
        struct Full: u8 {}
    }

    #[test]
    fn name_round_trip() {
        for flag in Tri::spec().flags() {
            let name = Tri::spec().to_str(flag).unwrap();
            assert_eq!(Tri::spec().from_name(name).unwrap(), flag);
            assert_eq!(name.parse::<Tri>().unwrap(), flag);
            assert_eq!(flag.to_string(), name);
        }
        assert_eq!(Tri::spec().len(), 3);
        assert_eq!(Tri::spec().capacity(), 16);
    }

    #[test]
    fn complement_is_registry_relative() {
        let all = Tri::A | Tri::B | Tri::C;
        assert_eq!(!FlagSet::of(Tri::A), Tri::B | Tri::C);
        assert_eq!(!FlagSet::<Tri>::empty(), all);
        assert!((!all).is_empty());
        assert_eq!(!!FlagSet::of(Tri::B), FlagSet::of(Tri::B));
    }

    #[test]
    fn operators_are_pure_values() {
        let ab = Tri::A | Tri::B;
        let bc = Tri::B | Tri::C;
        assert_eq!(ab & bc, FlagSet::of(Tri::B));
        assert_eq!(ab ^ bc, Tri::A | Tri::C);
        assert_eq!(ab, Tri::A | Tri::B, "operands are unchanged");

        let mut s = FlagSet::empty();
        s |= Tri::C;
        s |= ab;
        assert_eq!(s, Tri::A | Tri::B | Tri::C);
        s &= bc;
        assert_eq!(s, bc);
        s ^= Tri::B;
        assert_eq!(s, FlagSet::of(Tri::C));
        s.remove(Tri::C);
        s.remove(Tri::C);
        assert!(s.is_empty());
        s.insert(Tri::A);
        assert!(s.contains(Tri::A) && !s.contains(Tri::B));
    }

    #[test]
    fn truthiness_and_queries() {
        assert!(!FlagSet::<Tri>::default().any());
        let ab = Tri::A | Tri::B;
        assert!(ab.any());
        assert!(ab.contains_all(FlagSet::of(Tri::A)));
        assert!(!ab.contains_all(Tri::A | Tri::C));
        assert!(ab.intersects(Tri::B | Tri::C));
        assert!(!ab.intersects(FlagSet::of(Tri::C)));
        assert_eq!(ab.iter().collect::<Vec<_>>(), vec![Tri::A, Tri::B]);
    }

    #[test]
    fn set_text_round_trip() {
        let ac = Tri::A | Tri::C;
        assert_eq!(ac.to_string(), "A | C");
        assert_eq!("A | C".parse::<FlagSet<Tri>>().unwrap(), ac);
        assert_eq!("C|A".parse::<FlagSet<Tri>>().unwrap(), ac);
        assert_eq!("".parse::<FlagSet<Tri>>().unwrap(), FlagSet::empty());
        assert!(matches!(
            "A | D".parse::<FlagSet<Tri>>(),
            Err(FlagError::UnknownString { .. })
        ));
        assert_eq!(format!("{:?}", Tri::B), "Tri(B)");
    }

    #[test]
    fn raw_construction_requires_single_bit() {
        assert_eq!(Tri::try_new(1 << 1), Ok(Tri::B));
        assert!(Tri::try_new(0).is_ok());
        assert!(matches!(
            Tri::try_new(0b11),
            Err(FlagError::InvalidFlag { value: 3, .. })
        ));
    }

    #[test]
    fn unregistered_flag_is_rejected() {
        let stray = Tri::try_new(1 << 9).unwrap();
        assert!(matches!(
            FlagSet::try_from_flag(stray),
            Err(FlagError::UnknownFlag { value: 0x200, .. })
        ));
        assert!(matches!(
            Tri::spec().to_str(stray),
            Err(FlagError::UnknownFlag { .. })
        ));
        assert!(matches!(
            Tri::spec().from_name("Z"),
            Err(FlagError::UnknownString { .. })
        ));
        assert_eq!(FlagSet::try_from_flag(Tri::A), Ok(FlagSet::of(Tri::A)));
    }

    #[test]
    fn conversion_from_unregistered_flag_fails() {
        let stray = Tri::try_new(1 << 9).unwrap();
        assert_eq!(
            FlagSet::<Tri>::try_from(stray),
            Err(FlagError::UnknownFlag {
                type_name: "Tri",
                value: 0x200
            })
        );
        assert_eq!(FlagSet::try_from(Tri::C), Ok(FlagSet::of(Tri::C)));
    }

    #[test]
    #[should_panic(expected = "unknown Tri flag with value 0x100")]
    fn operators_reject_unregistered_flag() {
        let stray = Tri::try_new(1 << 8).unwrap();
        let _ = Tri::A | stray;
    }

    #[test]
    #[should_panic(expected = "unknown Tri flag with value 0x400")]
    fn insert_rejects_unregistered_flag() {
        let mut set = FlagSet::of(Tri::A);
        set.insert(Tri::try_new(1 << 10).unwrap());
    }

    #[test]
    fn runtime_registration() {
        let second = Grow::try_new(1 << 1).unwrap();
        let spec = Grow::spec();
        assert_eq!(!FlagSet::of(Grow::FIRST), FlagSet::empty());
        spec.insert(second, "SECOND").unwrap();
        assert_eq!(!FlagSet::of(Grow::FIRST), FlagSet::of(second));
        assert_eq!(
            spec.insert(second, "OTHER"),
            Err(FlagError::DuplicateFlag {
                type_name: "Grow",
                value: 2
            })
        );
        let third = Grow::try_new(1 << 2).unwrap();
        assert_eq!(
            spec.insert(third, "FIRST"),
            Err(FlagError::DuplicateName {
                type_name: "Grow",
                name: "FIRST"
            })
        );
        assert!(!spec.contains(third));
        // The zero-valued entry is registered but never "contained".
        assert!(spec.contains(Grow::NONE));
        assert!(!(Grow::FIRST | Grow::NONE).contains(Grow::NONE));
    }

    #[test]
    fn registry_capacity_is_bit_width() {
        let spec = Full::spec();
        let names = ["B0", "B1", "B2", "B3", "B4", "B5", "B6", "B7"];
        for (n, name) in names.into_iter().enumerate() {
            spec.insert(Full::try_new(1 << n).unwrap(), name).unwrap();
        }
        assert_eq!(spec.len(), spec.capacity());
        assert_eq!(
            spec.insert(Full::default(), "ZERO"),
            Err(FlagError::CapacityExceeded {
                type_name: "Full",
                capacity: 8
            })
        );
    }

    #[test]
    fn explicit_registry_construction() {
        let spec = FlagSpec::with_flags(&[(Tri::A, "a"), (Tri::B, "b")]).unwrap();
        assert_eq!(spec.to_str(Tri::B), Ok("b"));
        assert_eq!(spec.flags(), vec![Tri::A, Tri::B]);
        assert!(FlagSpec::with_flags(&[(Tri::A, "a"), (Tri::A, "b")]).is_err());
        assert!(FlagSpec::<Tri>::new().is_empty());
    }
}
