//! Mutation notifications.
//!
//! A [`Position`] never prints or logs on its own behalf beyond `tracing`
//! events. Callers that want to react to changes attach a
//! [`PositionObserver`], which runs after each successful mutation.

use std::fmt;

use chess_core::{Color, Piece};

use crate::Position;

/// What a successful mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A whole FEN record was loaded.
    Loaded,
    ColorMask(Color),
    PieceMask(Piece),
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

/// Receives a callback after every successful mutation of a [`Position`].
///
/// Failed loads do not notify.
pub trait PositionObserver: Send + Sync {
    fn on_change(&self, change: Change, position: &Position);
}

impl<F> PositionObserver for F
where
    F: Fn(Change, &Position) + Send + Sync,
{
    fn on_change(&self, change: Change, position: &Position) {
        self(change, position)
    }
}

/// Holds the attached observer, if any.
///
/// The slot is invisible to equality and `Debug`, and a clone starts with
/// no observer: the callback belongs to the value it was attached to.
#[derive(Default)]
pub(crate) struct ObserverSlot(Option<Box<dyn PositionObserver>>);

impl ObserverSlot {
    pub(crate) fn replace(
        &mut self,
        observer: Option<Box<dyn PositionObserver>>,
    ) -> Option<Box<dyn PositionObserver>> {
        std::mem::replace(&mut self.0, observer)
    }

    pub(crate) fn get(&self) -> Option<&dyn PositionObserver> {
        self.0.as_deref()
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.0.is_some()
    }
}

impl Clone for ObserverSlot {
    fn clone(&self) -> Self {
        ObserverSlot(None)
    }
}

impl PartialEq for ObserverSlot {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for ObserverSlot {}

impl fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_attached() {
            f.write_str("Some(<observer>)")
        } else {
            f.write_str("None")
        }
    }
}
