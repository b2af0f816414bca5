//! List View State
//!
//! The collection shown in the table, the series derived from it, and the
//! fetch/delete flows that keep them current.

use super::model::Student;
use super::series::DashboardSeries;
use super::{StateCell, ViewError};
use crate::api::{ApiError, StudentApi};
use crate::console;

/// Identifies one collection fetch; later fetches carry larger tickets
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub students: Vec<Student>,
    pub series: DashboardSeries,
    pub error: Option<ViewError>,
    /// Set until the first fetch settles
    pub loaded: bool,
    issued: u64,
    applied: u64,
}

impl ListState {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Apply a fetch result unless a newer one has already landed.
    ///
    /// A failure keeps the current rows and series and raises the banner.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Student>, ApiError>,
    ) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.loaded = true;

        match result {
            Ok(students) => {
                self.series = DashboardSeries::from_students(&students);
                self.students = students;
                self.error = None;
            }
            Err(_) => self.error = Some(ViewError::FetchAll),
        }
        true
    }

    pub fn fail_delete(&mut self) {
        self.error = Some(ViewError::Delete);
    }
}

/// Fetch the whole collection into `state`
pub async fn refresh<A, S>(api: &A, state: &S)
where
    A: StudentApi,
    S: StateCell<ListState>,
{
    let Some(ticket) = state.modify(ListState::begin_fetch) else {
        return;
    };

    let result = api.fetch_all().await;
    if let Err(e) = &result {
        console::error(&format!("Failed to fetch students: {}", e));
    }

    state.modify(|s| s.apply_fetch(ticket, result));
}

/// Delete one entry, then re-fetch the collection.
///
/// `on_deleted` runs between the two, while the view is still mounted.
pub async fn delete_and_refresh<A, S>(api: &A, state: &S, id: &str, on_deleted: impl FnOnce())
where
    A: StudentApi,
    S: StateCell<ListState>,
{
    match api.delete(id).await {
        Ok(()) => {
            if state.modify(|_| ()).is_none() {
                return;
            }
            on_deleted();
            refresh(api, state).await;
        }
        Err(e) => {
            console::error(&format!("Failed to delete student {}: {}", id, e));
            state.modify(ListState::fail_delete);
        }
    }
}
