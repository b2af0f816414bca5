//! In-memory [`StudentApi`] for view-state tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::api::{ApiError, StudentApi};
use crate::state::model::{Student, StudentFields};
use crate::state::StateCell;

pub fn student(id: &str, date: &str, pushups: &str, ran: &str, weight: &str) -> Student {
    Student {
        id: id.to_string(),
        fields: StudentFields {
            student_name: date.to_string(),
            student_address: "gym".to_string(),
            status: "Healthy".to_string(),
            pushups: pushups.to_string(),
            ran_distance: ran.to_string(),
            weight_lifted: weight.to_string(),
        },
    }
}

/// A call as it reached the double
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    FetchAll,
    FetchOne(String),
    Update(String, StudentFields),
    Delete(String),
}

/// Records every call and answers from queued responses.
///
/// An empty queue answers `Err(ApiError::Status(500))`.
#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub collections: RefCell<VecDeque<Result<Vec<Student>, ApiError>>>,
    pub records: RefCell<VecDeque<Result<Student, ApiError>>>,
    pub writes: RefCell<VecDeque<Result<(), ApiError>>>,
}

impl MockApi {
    pub fn with_collection(self, students: Vec<Student>) -> Self {
        self.collections.borrow_mut().push_back(Ok(students));
        self
    }

    pub fn with_collection_error(self) -> Self {
        self.collections
            .borrow_mut()
            .push_back(Err(ApiError::Network("connection refused".into())));
        self
    }

    pub fn with_record(self, student: Student) -> Self {
        self.records.borrow_mut().push_back(Ok(student));
        self
    }

    pub fn with_write(self, result: Result<(), ApiError>) -> Self {
        self.writes.borrow_mut().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn unanswered<T>() -> Result<T, ApiError> {
        Err(ApiError::Status(500))
    }
}

impl StudentApi for MockApi {
    async fn fetch_all(&self) -> Result<Vec<Student>, ApiError> {
        self.calls.borrow_mut().push(Call::FetchAll);
        self.collections
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unanswered)
    }

    async fn fetch_one(&self, id: &str) -> Result<Student, ApiError> {
        self.calls.borrow_mut().push(Call::FetchOne(id.to_string()));
        self.records
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unanswered)
    }

    async fn update(&self, id: &str, fields: &StudentFields) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id.to_string(), fields.clone()));
        self.writes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unanswered)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id.to_string()));
        self.writes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unanswered)
    }
}

/// State whose view unmounts after `live` updates.
///
/// From then on `modify` answers `None`, as a disposed signal does.
pub struct UnmountingCell<T> {
    pub value: RefCell<T>,
    live: Cell<usize>,
}

impl<T> UnmountingCell<T> {
    pub fn new(value: T, live: usize) -> Self {
        Self {
            value: RefCell::new(value),
            live: Cell::new(live),
        }
    }

    /// Already gone before the first update
    pub fn unmounted(value: T) -> Self {
        Self::new(value, 0)
    }
}

impl<T> StateCell<T> for UnmountingCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let live = self.live.get();
        if live == 0 {
            return None;
        }
        self.live.set(live - 1);
        Some(f(&mut self.value.borrow_mut()))
    }
}
