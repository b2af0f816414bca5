//! Edit View State
//!
//! Loading → Ready → Submitting → Navigated, falling back to Ready with an
//! error when the update fails.

use super::model::{Student, StudentFields};
use super::{StateCell, ViewError};
use crate::api::{ApiError, StudentApi};
use crate::console;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Loading,
    Ready,
    Submitting,
    Navigated,
}

/// One of the six controlled inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Status,
    Pushups,
    Distance,
    Weight,
}

impl Field {
    pub fn get<'a>(&self, fields: &'a StudentFields) -> &'a str {
        match self {
            Field::Name => &fields.student_name,
            Field::Address => &fields.student_address,
            Field::Status => &fields.status,
            Field::Pushups => &fields.pushups,
            Field::Distance => &fields.ran_distance,
            Field::Weight => &fields.weight_lifted,
        }
    }

    fn slot<'a>(&self, fields: &'a mut StudentFields) -> &'a mut String {
        match self {
            Field::Name => &mut fields.student_name,
            Field::Address => &mut fields.student_address,
            Field::Status => &mut fields.status,
            Field::Pushups => &mut fields.pushups,
            Field::Distance => &mut fields.ran_distance,
            Field::Weight => &mut fields.weight_lifted,
        }
    }

    /// The `name` attribute of the input, matching the wire name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "studentname",
            Field::Address => "studentaddress",
            Field::Status => "status",
            Field::Pushups => "noofpushups",
            Field::Distance => "randistance",
            Field::Weight => "weightlifted",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditForm {
    id: String,
    pub fields: StudentFields,
    pub phase: EditPhase,
    pub error: Option<ViewError>,
}

impl EditForm {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self, field: Field) -> &str {
        field.get(&self.fields)
    }

    /// Point the form at `id`. A different id starts over with empty fields.
    pub fn begin_load(&mut self, id: &str) {
        if self.id != id {
            *self = EditForm {
                id: id.to_string(),
                ..EditForm::default()
            };
        } else {
            self.phase = EditPhase::Loading;
        }
    }

    /// Apply the record fetched for `id`; answers for another id are ignored
    pub fn apply_load(&mut self, id: &str, result: Result<Student, ApiError>) -> bool {
        if self.id != id || self.phase != EditPhase::Loading {
            return false;
        }

        match result {
            Ok(student) => {
                self.fields = student.fields;
                self.error = None;
            }
            Err(_) => self.error = Some(ViewError::FetchOne),
        }
        self.phase = EditPhase::Ready;
        true
    }

    pub fn set(&mut self, field: Field, value: String) {
        *field.slot(&mut self.fields) = value;
    }

    /// Start a submission, handing back what to send.
    ///
    /// Only a Ready form submits, so a second click while one is in flight
    /// does nothing.
    pub fn begin_submit(&mut self) -> Option<(String, StudentFields)> {
        if self.phase != EditPhase::Ready {
            return None;
        }
        self.phase = EditPhase::Submitting;
        self.error = None;
        Some((self.id.clone(), self.fields.clone()))
    }

    pub fn apply_submit(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.phase = EditPhase::Navigated,
            Err(_) => {
                self.phase = EditPhase::Ready;
                self.error = Some(ViewError::Update);
            }
        }
    }
}

/// Fetch the record for `id` into the form
pub async fn load<A, S>(api: &A, form: &S, id: String)
where
    A: StudentApi,
    S: StateCell<EditForm>,
{
    if form.modify(|f| f.begin_load(&id)).is_none() {
        return;
    }

    let result = api.fetch_one(&id).await;
    if let Err(e) = &result {
        console::error(&format!("Failed to fetch student {}: {}", id, e));
    }

    form.modify(|f| f.apply_load(&id, result));
}

/// Send the current fields as a full update.
///
/// `on_saved` runs only when the update succeeded and the form is still
/// mounted.
pub async fn submit<A, S>(api: &A, form: &S, on_saved: impl FnOnce())
where
    A: StudentApi,
    S: StateCell<EditForm>,
{
    let Some(Some((id, fields))) = form.modify(EditForm::begin_submit) else {
        return;
    };

    let result = api.update(&id, &fields).await;
    if let Err(e) = &result {
        console::error(&format!("Failed to update student {}: {}", id, e));
    }
    let saved = result.is_ok();

    if form.modify(|f| f.apply_submit(result)).is_some() && saved {
        on_saved();
    }
}
