//! Macro for implementing string conversions on wire enums
//!
//! Every enum the API exchanges as a bare string (post status, media type,
//! tone, report format) needs the same three conversions: a `&'static str`
//! view for query parameters, `Display`, and a case-insensitive `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use aisocial_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Private,
//! }
//!
//! impl_wire_enum_conversions!(Visibility {
//!     Public => "public",
//!     Private => "private",
//! });
//!
//! assert_eq!(Visibility::Public.as_str(), "public");
//! assert_eq!("PRIVATE".parse::<Visibility>().unwrap(), Visibility::Private);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
///
/// Parsing is case-insensitive; the error names the enum and echoes the
/// rejected input.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::core::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $enum_name {
            type Err = $crate::errors::AiSocialError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::AiSocialError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::errors::AiSocialError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Channel {
        Email,
        Sms,
        Push,
    }

    impl_wire_enum_conversions!(Channel {
        Email => "email",
        Sms => "sms",
        Push => "push",
    });

    #[test]
    fn test_display_uses_wire_string() {
        assert_eq!(Channel::Email.to_string(), "email");
        assert_eq!(Channel::Sms.to_string(), "sms");
        assert_eq!(format!("{}", Channel::Push), "push");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(Channel::from_str("email").unwrap(), Channel::Email);
        assert_eq!(Channel::from_str("SMS").unwrap(), Channel::Sms);
        assert_eq!(Channel::from_str("PuSh").unwrap(), Channel::Push);
    }

    #[test]
    fn test_fromstr_invalid_reports_enum_name() {
        let err = Channel::from_str("fax").unwrap_err();
        assert_eq!(err, AiSocialError::InvalidInput("Invalid Channel: fax".to_string()));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(Channel::from_str("").is_err());
    }

    // Expands next to the crate's one-parameter `Result` alias.
    mod with_result_alias {
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Priority {
            Low,
            High,
        }

        impl_wire_enum_conversions!(Priority {
            Low => "low",
            High => "high",
        });

        #[test]
        fn test_expands_beside_result_alias() {
            let parsed: Result<Priority> = "HIGH".parse::<Priority>();
            assert_eq!(parsed.unwrap(), Priority::High);
            assert_eq!(Priority::Low.to_string(), "low");
        }
    }
}
