//! Error types for the viewgraph core library.
//!
//! Only conditions caused by external data are errors; bookkeeping bugs such
//! as an unregistered dense index panic instead.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while reading a view-pair list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PairFileError {
    /// The underlying reader failed.
    #[error("failed to read pair list: {source}")]
    Io {
        /// Error raised by the reader.
        #[source]
        source: io::Error,
    },
    /// A non-blank line held a view id without any partner.
    #[error("line {line}: expected a view id followed by at least one partner, found {found} value(s)")]
    TooFewIds {
        /// One-based line number.
        line: usize,
        /// Number of values present on the line.
        found: usize,
    },
    /// A token could not be parsed as a view id.
    #[error("line {line}: `{token}` is not a valid view id")]
    InvalidId {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A view was listed as its own partner.
    #[error("line {line}: view {view} is paired with itself")]
    SelfPair {
        /// One-based line number.
        line: usize,
        /// The view paired with itself.
        view: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`PairFileError`] variants.
    enum PairFileErrorCode for PairFileError {
        /// The underlying reader failed.
        Io => Io { .. } => "PAIR_FILE_IO",
        /// A non-blank line held a view id without any partner.
        TooFewIds => TooFewIds { .. } => "PAIR_FILE_TOO_FEW_IDS",
        /// A token could not be parsed as a view id.
        InvalidId => InvalidId { .. } => "PAIR_FILE_INVALID_ID",
        /// A view was listed as its own partner.
        SelfPair => SelfPair { .. } => "PAIR_FILE_SELF_PAIR",
    }
}

impl PairFileError {
    /// One-based line number of the offending line, when the error is tied to
    /// one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::TooFewIds { line, .. }
            | Self::InvalidId { line, .. }
            | Self::SelfPair { line, .. } => Some(*line),
        }
    }
}
