// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Errors returned when a [`Panel`][crate::Panel] is handed an id it doesn't
//! know, or finds its shared raceways out of step with its circuits.
//!
//! A circuit never returns these.  A rule broken by a circuit change is
//! recorded in the circuit's [`Messages`][crate::Messages], and the circuit
//! falls back to free air.

/// Declares the error kinds, their names for display, and one crate-private
/// `Error` constructor per kind.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Debug, PartialEq)]
        pub(crate) enum ErrorKind {
            $(
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (CircuitNotFound, circuit_not_found),
    (Internal, internal),
    (RacewayNotFound, raceway_not_found)
);

/// A failed id lookup or consistency check in a [Panel][crate::Panel].
#[derive(Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::circuit_not_found("Circuit with id 4 not found.").to_string(),
            "CircuitNotFound: Circuit with id 4 not found."
        );
        assert_eq!(Error::internal("oops").to_string(), "Internal: oops");
        assert_ne!(Error::internal("a"), Error::raceway_not_found("a"));
    }
}
