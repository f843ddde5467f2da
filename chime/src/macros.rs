/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Macros that stamp out the model, input and output shapes.

/// Define a shape: a struct of optional fields, its builder, and a `Debug` impl that skips
/// unset fields.
///
/// Every field is wrapped in `Option`. Unset fields are left out of the JSON body and of the
/// `Debug` output; set fields appear in declared order. Fields listed under `sensitive` print
/// as a placeholder in `Debug`.
macro_rules! shape {
    (
        $(#[doc = $doc:literal])*
        pub struct $name:ident => $builder:ident $(, sensitive: [$($sensitive:ident),* $(,)?])? {
            $(
                $(#[doc = $field_doc:literal])*
                $(#[serde($($serde:tt)*)])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[doc = $field_doc])*
                $(#[serde($($serde)*)])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl ::std::fmt::Debug for $name {
            #[allow(unused_mut, dead_code)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                const SENSITIVE: &[&str] = &[$($(stringify!($sensitive)),*)?];
                let mut formatter = f.debug_struct(stringify!($name));
                $(
                    if let Some(value) = &self.$field {
                        if SENSITIVE.contains(&stringify!($field)) {
                            formatter.field(stringify!($field), &"*** Sensitive Data Redacted ***");
                        } else {
                            formatter.field(stringify!($field), value);
                        }
                    }
                )*
                formatter.finish()
            }
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $builder {
            inner: $name,
        }

        ::paste::paste! {
            impl $builder {
                $(
                    $(#[doc = $field_doc])*
                    pub fn $field(mut self, input: impl Into<$ty>) -> Self {
                        self.inner.$field = Some(input.into());
                        self
                    }

                    /// Sets the field from an `Option`; `None` leaves it unset.
                    pub fn [<set_ $field>](mut self, input: Option<$ty>) -> Self {
                        self.inner.$field = input;
                        self
                    }
                )*
            }
        }

        impl $builder {
            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                self.inner
            }
        }
    };
}

/// Define a string enum.
///
/// The generated type serializes as its wire value. `FromStr` refuses values it does not list;
/// deserialization keeps them in `Unknown` so a response carrying a newer value still parses.
macro_rules! string_enum {
    (
        $(#[doc = $doc:literal])*
        pub enum $name:ident {
            $(
                $(#[doc = $variant_doc:literal])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[doc = $doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[doc = $variant_doc])*
                $variant,
            )+
            /// A value sent by the service that this version of the crate does not list.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire value of this variant.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns all known wire values, in declared order.
            pub const fn values() -> &'static [&'static str] {
                &[$( $value, )+]
            }

            /// Maps a wire value to its variant, keeping unlisted values in `Unknown`.
            pub fn from_wire(value: &str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $name::from_wire(s) {
                    $name::Unknown(other) => {
                        Err($crate::error::UnknownVariantError::new(stringify!($name), other))
                    }
                    known => Ok(known),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::UnknownVariantError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from_wire(&value))
            }
        }
    };
}
