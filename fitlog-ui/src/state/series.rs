//! Chart Series
//!
//! One series per exercise, derived from the collection in list order.

use super::model::{Student, StudentFields};

/// A single point: the entry's date label and its raw value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: String,
}

impl SeriesPoint {
    /// The value as a number, `None` for blanks and junk (plotted as a gap)
    pub fn numeric(&self) -> Option<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// The three charted exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    Pushups,
    Distance,
    Weight,
}

impl Exercise {
    pub const ALL: [Exercise; 3] = [Exercise::Pushups, Exercise::Distance, Exercise::Weight];

    pub fn value<'a>(&self, fields: &'a StudentFields) -> &'a str {
        match self {
            Exercise::Pushups => &fields.pushups,
            Exercise::Distance => &fields.ran_distance,
            Exercise::Weight => &fields.weight_lifted,
        }
    }

    pub fn canvas_id(&self) -> &'static str {
        match self {
            Exercise::Pushups => "pushupChart",
            Exercise::Distance => "randistancechart",
            Exercise::Weight => "weightliftedchart",
        }
    }

    /// Legend label of the dataset
    pub fn dataset_label(&self) -> &'static str {
        match self {
            Exercise::Pushups => "No Of Pushups",
            Exercise::Distance => "Ran Distance",
            Exercise::Weight => "Weight Lifted",
        }
    }

    pub fn y_axis_title(&self) -> &'static str {
        match self {
            // The distance chart has always carried the pushups title.
            Exercise::Pushups | Exercise::Distance => "No Of Pushups",
            Exercise::Weight => "Weight",
        }
    }
}

/// Build one exercise's series
pub fn derive_series(students: &[Student], exercise: Exercise) -> Vec<SeriesPoint> {
    students
        .iter()
        .map(|student| SeriesPoint {
            label: student.fields.student_name.clone(),
            value: exercise.value(&student.fields).to_string(),
        })
        .collect()
}

/// All three series of the dashboard
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSeries {
    pub pushups: Vec<SeriesPoint>,
    pub distance: Vec<SeriesPoint>,
    pub weight: Vec<SeriesPoint>,
}

impl DashboardSeries {
    pub fn from_students(students: &[Student]) -> Self {
        Self {
            pushups: derive_series(students, Exercise::Pushups),
            distance: derive_series(students, Exercise::Distance),
            weight: derive_series(students, Exercise::Weight),
        }
    }

    pub fn get(&self, exercise: Exercise) -> &[SeriesPoint] {
        match exercise {
            Exercise::Pushups => &self.pushups,
            Exercise::Distance => &self.distance,
            Exercise::Weight => &self.weight,
        }
    }
}
