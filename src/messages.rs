// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The message ledger, in which circuits record the outcome of validating
//! their configuration, and the catalog of messages they can record.
//!
//! Messages are identified by a stable numeric id.  The sign of the id
//! carries the severity: negative ids are errors, positive ids are warnings,
//! and zero is a neutral status message.

use std::collections::BTreeMap;
use std::fmt::Display;

/// The severity of a message, derived from the sign of its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Neutral,
    Warning,
}

impl Severity {
    fn of(id: i32) -> Self {
        match id {
            i32::MIN..=-1 => Severity::Error,
            0 => Severity::Neutral,
            _ => Severity::Warning,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Neutral => write!(f, "Neutral"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// A catalog entry: a stable id with its default text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    id: i32,
    text: &'static str,
}

impl Message {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.id)
    }
}

/// A macro for declaring the message catalog as constants, together with the
/// `ALL` slice listing every one of them.
macro_rules! message_catalog {
    ($(
        $(#[$attr:meta])*
        ($name:ident, $id:expr, $text:expr)
    ),* $(,)?) => {
        $(
            $(#[$attr])*
            pub const $name: Message = Message { id: $id, text: $text };
        )*

        /// Every message in the catalog.
        pub const ALL: &[Message] = &[$($name),*];
    };
}

message_catalog!(
    /// The circuit's load reports quantities that can't be used for sizing.
    (ERROR_INVALID_LOAD, -1, "Load is not valid."),
    (
        ERROR_SHARED_CONDUIT_SETS,
        -2,
        "More than one set of conductors or cables cannot be in a shared conduit."
    ),
    (
        ERROR_SHARED_BUNDLE_SETS,
        -3,
        "More than one set of conductors or cables cannot be in a shared bundle."
    ),
    (ERROR_SHARED_CONDUIT_MISSING, -4, "The shared conduit cannot be null."),
    (ERROR_SHARED_BUNDLE_MISSING, -5, "The shared bundle cannot be null."),
    /// Conduit counts only apply to the circuit's own conduits.
    (
        ERROR_CONDUIT_COUNT_MODE,
        -6,
        "The number of conduits can only be changed in private conduit mode."
    ),
    (
        WARNING_CONDUCTORS_IN_FREE_AIR,
        1,
        "Insulated conductors in free air is possibly a bad practice."
    ),
    (
        WARNING_CONDUCTORS_IN_BUNDLE,
        2,
        "Insulated conductors in a bundle is possibly a bad practice."
    ),
    (
        WARNING_CABLE_IN_CONDUIT,
        3,
        "Cable in a conduit is a costly practice."
    ),
);

/// The messages tied to the routing mode of a circuit.  They are cleared at the
/// start of every mode transition.
pub(crate) const MODE_MESSAGES: &[Message] = &[
    ERROR_SHARED_CONDUIT_SETS,
    ERROR_SHARED_BUNDLE_SETS,
    ERROR_SHARED_CONDUIT_MISSING,
    ERROR_SHARED_BUNDLE_MISSING,
    ERROR_CONDUIT_COUNT_MODE,
    WARNING_CONDUCTORS_IN_FREE_AIR,
    WARNING_CONDUCTORS_IN_BUNDLE,
    WARNING_CABLE_IN_CONDUIT,
];

/// A de-duplicated collection of messages, keyed by id.
///
/// Adding an id that is already present keeps the existing text, and removing
/// an id that is absent does nothing, so validation steps can re-run freely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    entries: BTreeMap<i32, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message with the given id, unless one is already present.
    pub fn add(&mut self, id: i32, text: impl Into<String>) {
        self.entries.entry(id).or_insert_with(|| text.into());
    }

    /// Records a catalog message.
    pub fn add_message(&mut self, message: &Message) {
        self.add(message.id, message.text);
    }

    /// Removes the message with the given id, if present.
    pub fn remove(&mut self, id: i32) {
        self.entries.remove(&id);
    }

    pub fn has(&self, id: i32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn has_message(&self, message: &Message) -> bool {
        self.has(message.id)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.keys().any(|id| *id < 0)
    }

    pub fn has_warnings(&self) -> bool {
        self.entries.keys().any(|id| *id > 0)
    }

    /// Returns the text recorded for the given id.
    pub fn text(&self, id: i32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Returns an iterator over the recorded `(id, text)` pairs, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries.iter().map(|(id, text)| (*id, text.as_str()))
    }

    /// Returns an iterator over the recorded entries with the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = (i32, &str)> {
        self.iter().filter(move |(id, _)| Severity::of(*id) == severity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn remove_all(&mut self, messages: &[Message]) {
        for message in messages {
            self.remove(message.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_writer_wins() {
        let mut messages = Messages::new();
        messages.add(-7, "first");
        messages.add(-7, "second");

        assert_eq!(messages.len(), 1);
        assert_eq!(messages.text(-7), Some("first"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut messages = Messages::new();
        messages.add_message(&WARNING_CABLE_IN_CONDUIT);
        messages.remove(WARNING_CABLE_IN_CONDUIT.id());
        messages.remove(WARNING_CABLE_IN_CONDUIT.id());

        assert!(messages.is_empty());
        assert!(!messages.has_message(&WARNING_CABLE_IN_CONDUIT));
    }

    #[test]
    fn test_severity() {
        let mut messages = Messages::new();
        assert!(!messages.has_errors());
        assert!(!messages.has_warnings());

        messages.add(0, "status");
        assert!(!messages.has_errors());
        assert!(!messages.has_warnings());

        messages.add_message(&WARNING_CONDUCTORS_IN_FREE_AIR);
        assert!(!messages.has_errors());
        assert!(messages.has_warnings());

        messages.add_message(&ERROR_SHARED_CONDUIT_SETS);
        assert!(messages.has_errors());

        assert!(messages
            .with_severity(Severity::Error)
            .eq([(-2, ERROR_SHARED_CONDUIT_SETS.text())]));
        assert!(messages.with_severity(Severity::Neutral).eq([(0, "status")]));
        assert_eq!(ERROR_INVALID_LOAD.severity(), Severity::Error);
        assert_eq!(WARNING_CONDUCTORS_IN_BUNDLE.severity(), Severity::Warning);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids = ALL.iter().map(|m| m.id()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
        assert!(MODE_MESSAGES.iter().all(|m| ALL.contains(m)));
    }

    #[test]
    fn test_remove_all() {
        let mut messages = Messages::new();
        messages.add_message(&ERROR_INVALID_LOAD);
        messages.add_message(&ERROR_SHARED_BUNDLE_MISSING);
        messages.add_message(&WARNING_CONDUCTORS_IN_BUNDLE);

        messages.remove_all(MODE_MESSAGES);

        assert!(messages.iter().eq([(-1, ERROR_INVALID_LOAD.text())]));
    }
}
