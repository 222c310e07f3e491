// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`flag_type!`](crate::flag_type) declaration macro.

/// Declare a flag type together with its built-in flags.
///
/// ```
/// understory_flags::flag_type! {
///     /// Corners of a box.
///     pub struct Corner: u8 {
///         /// Top left.
///         const TOP_LEFT = 1 << 0;
///         /// Bottom right.
///         const BOTTOM_RIGHT = 1 << 1;
///     }
/// }
///
/// use understory_flags::FlagSet;
/// let both = Corner::TOP_LEFT | Corner::BOTTOM_RIGHT;
/// assert_eq!(both.to_string(), "TOP_LEFT | BOTTOM_RIGHT");
/// assert_eq!(!FlagSet::of(Corner::TOP_LEFT), FlagSet::of(Corner::BOTTOM_RIGHT));
/// assert_eq!("BOTTOM_RIGHT".parse::<Corner>(), Ok(Corner::BOTTOM_RIGHT));
/// ```
///
/// The macro generates:
/// - a newtype over the integer, with one associated constant per flag;
///   a constant with more than one bit set fails to compile,
/// - `try_new` for checked construction from a raw integer,
/// - a [`FlagType`](crate::FlagType) impl whose registry is created on first
///   use and seeded with every constant, named after the constant, in
///   declaration order,
/// - `Display`/`FromStr` through the registry names,
/// - `TryFrom<Flag> for FlagSet<Flag>`, failing with
///   [`FlagError::UnknownFlag`](crate::FlagError::UnknownFlag) for a flag
///   that is not registered,
/// - `|`, `&`, `^` producing [`FlagSet`](crate::FlagSet)s, and `!` as the
///   registry-relative complement. These panic on a flag that is not
///   registered; `FlagSet::try_from` reports it as an error instead.
#[macro_export]
macro_rules! flag_type {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident: $bits:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name($bits);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self::from_const($value);
            )*

            #[allow(dead_code, reason = "only used by generated constants")]
            const fn from_const(value: $bits) -> Self {
                assert!(
                    value.count_ones() <= 1,
                    concat!("non-bitflag constant in ", stringify!($name))
                );
                Self(value)
            }

            /// Build a flag from a raw value with at most one bit set.
            pub fn try_new(value: $bits) -> ::core::result::Result<Self, $crate::FlagError> {
                if value.count_ones() <= 1 {
                    Ok(Self(value))
                } else {
                    Err($crate::FlagError::InvalidFlag {
                        type_name: stringify!($name),
                        value: <$bits as $crate::Bits>::to_u64(value),
                    })
                }
            }

            /// The raw value.
            pub const fn bits(self) -> $bits {
                self.0
            }
        }

        impl $crate::FlagType for $name {
            type Bits = $bits;

            const NAME: &'static str = stringify!($name);

            fn to_bits(self) -> $bits {
                self.0
            }

            fn from_bits_unchecked(bits: $bits) -> Self {
                Self(bits)
            }

            fn spec() -> &'static $crate::FlagSpec<Self> {
                static SPEC: ::std::sync::OnceLock<$crate::FlagSpec<$name>> =
                    ::std::sync::OnceLock::new();
                SPEC.get_or_init(|| {
                    $crate::FlagSpec::seeded(&[$(($name::$flag, stringify!($flag))),*])
                })
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match <Self as $crate::FlagType>::spec().to_str(*self) {
                    Ok(name) => write!(f, "{}({})", stringify!($name), name),
                    Err(_) => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match <Self as $crate::FlagType>::spec().to_str(*self) {
                    Ok(name) => f.write_str(name),
                    Err(_) => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::FlagError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::FlagType>::spec().from_name(s.trim())
            }
        }

        impl ::core::convert::TryFrom<$name> for $crate::FlagSet<$name> {
            type Error = $crate::FlagError;

            fn try_from(flag: $name) -> ::core::result::Result<Self, Self::Error> {
                Self::try_from_flag(flag)
            }
        }

        impl $crate::IntoFlagSet<$name> for $name {
            #[track_caller]
            fn into_flag_set(self) -> $crate::FlagSet<$name> {
                $crate::FlagSet::of(self)
            }
        }

        impl<R: $crate::IntoFlagSet<$name>> ::core::ops::BitOr<R> for $name {
            type Output = $crate::FlagSet<$name>;

            fn bitor(self, rhs: R) -> Self::Output {
                $crate::FlagSet::of(self) | rhs
            }
        }

        impl<R: $crate::IntoFlagSet<$name>> ::core::ops::BitAnd<R> for $name {
            type Output = $crate::FlagSet<$name>;

            fn bitand(self, rhs: R) -> Self::Output {
                $crate::FlagSet::of(self) & rhs
            }
        }

        impl<R: $crate::IntoFlagSet<$name>> ::core::ops::BitXor<R> for $name {
            type Output = $crate::FlagSet<$name>;

            fn bitxor(self, rhs: R) -> Self::Output {
                $crate::FlagSet::of(self) ^ rhs
            }
        }

        impl ::core::ops::Not for $name {
            type Output = $crate::FlagSet<$name>;

            fn not(self) -> Self::Output {
                !$crate::FlagSet::of(self)
            }
        }
    };
}
