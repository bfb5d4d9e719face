// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Handles to raceways shared by several circuits.

use super::{Bundle, Conduit};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A raceway owned outside of any circuit, that any number of circuits can be
/// routed through.
///
/// Cloning a `Shared` handle yields another handle to the same raceway.  The
/// handle is single-threaded: callers that need a shared raceway across
/// threads must serialize access to it themselves.  Borrows returned by
/// [`borrow`][Shared::borrow] must be released before routing a circuit
/// through the raceway.  A circuit dropped while such a borrow is alive can't
/// remove its entities, and leaves them in the raceway.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

/// A conduit shared by several circuits.
pub type SharedConduit = Shared<Conduit>;

/// A bundle shared by several circuits.
pub type SharedBundle = Shared<Bundle>;

impl<T> Shared<T> {
    pub fn new(raceway: T) -> Self {
        Shared(Rc::new(RefCell::new(raceway)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns true if the raceway is borrowed through another handle.
    pub(crate) fn is_borrowed(&self) -> bool {
        self.0.try_borrow_mut().is_err()
    }

    /// Returns true if both handles refer to the same raceway.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T> From<T> for Shared<T> {
    fn from(raceway: T) -> Self {
        Shared::new(raceway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TradeSize;

    #[test]
    fn test_handles() {
        let conduit = SharedConduit::new(Conduit::default());
        let other = conduit.clone();
        assert!(conduit.ptr_eq(&other));
        assert!(!conduit.ptr_eq(&SharedConduit::default()));

        other.borrow_mut().set_trade_size(TradeSize::T2);
        assert_eq!(conduit.borrow().trade_size(), TradeSize::T2);

        let guard = other.borrow();
        assert!(conduit.is_borrowed());
        drop(guard);
        assert!(!conduit.is_borrowed());
    }
}
