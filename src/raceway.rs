// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Raceways that enclose the entities of one or more circuits: conduits and
//! bundles.
//!
//! Raceways only track which entities they hold.  Membership changes are made
//! by circuits, when they change their routing mode or rebuild their conductor
//! sets.

mod bundle;
mod conduit;
mod members;
mod shared;

pub use bundle::Bundle;
pub use conduit::Conduit;
pub use members::Members;
pub use shared::{Shared, SharedBundle, SharedConduit};

/// Read access to the entities held by a raceway.
pub trait Raceway {
    /// Returns the entities in the raceway.
    fn members(&self) -> &Members;

    /// Returns the number of items filling the raceway.  A cable counts as a
    /// single item, regardless of how many conductors it contains.
    fn filling_count(&self) -> usize {
        self.members().len()
    }

    /// Returns the number of current-carrying conductors in the raceway,
    /// including those inside cables.
    fn current_carrying_count(&self) -> usize {
        self.members().current_carrying_count()
    }

    fn is_empty(&self) -> bool {
        self.members().is_empty()
    }
}
