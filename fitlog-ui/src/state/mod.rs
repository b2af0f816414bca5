//! State Management
//!
//! View state for the list and edit views, kept free of DOM access so the
//! fetch/delete/update flows can be exercised natively.

pub mod edit;
pub mod global;
pub mod list;
pub mod model;
pub mod series;

#[cfg(test)]
pub(crate) mod testing;

pub use global::{provide_global_state, GlobalState};

use std::cell::RefCell;
use std::fmt;

use leptos::{RwSignal, SignalUpdate};

/// Message shown inline when a call fails
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    FetchAll,
    Delete,
    FetchOne,
    Update,
}

impl ViewError {
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::FetchAll | ViewError::FetchOne => "Error fetching details",
            ViewError::Delete => "Error deleting student details",
            ViewError::Update => "Error updating details",
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Somewhere a view keeps its state between awaits.
///
/// `modify` returns `None` once the owning view is gone, and callers stop
/// there instead of touching state that no longer exists.
pub trait StateCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: 'static> StateCell<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
