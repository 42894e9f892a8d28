//! Macros for use in rdata definitions.

/// Creates a record data type consisting of a single domain name.
///
/// The type gets a `new` function, an accessor named after the field, a
/// conversion into the name, `Display`, and a `parse` function decoding
/// the name, possibly compressed, from a cursor.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $field:ident, $into_field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            $field: std::string::String,
        }

        impl $target {
            pub fn new($field: impl Into<std::string::String>) -> Self {
                $target { $field: $field.into() }
            }

            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $into_field(self) -> std::string::String {
                self.$field
            }

            pub fn parse(
                cursor: &mut $crate::base::wire::Cursor,
            ) -> Result<Self, $crate::base::wire::DecodeError> {
                $crate::base::name::parse(cursor).map(|$field| {
                    $target { $field }
                })
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(&self.$field)
            }
        }
    }
}

/// Takes the remainder of the record data after some fixed fields.
///
/// Fails with `DecodeError::InvalidLength` if the declared length is
/// shorter than the fixed fields.
macro_rules! rest_len {
    ( $rdlen:expr, $fixed:expr, $what:expr ) => {
        usize::from($rdlen).checked_sub($fixed).ok_or(
            $crate::base::wire::DecodeError::InvalidLength(concat!(
                $what,
                " record data shorter than its fixed fields"
            )),
        )
    };
}
