// 🎓 Tuition Entity - a fee charged to a student for one semester
//
// amount is an exact base-10 decimal (never f64), serialized as a string.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::{self, Filter};
use crate::merge::Merge;
use crate::patch::Patch;

// ============================================================================
// TUITION TYPE / SEMESTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuitionType {
    Tuition,
    LibraryFee,
    GymFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Spring,
    Summer,
}

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuition {
    /// UNI of the billed student
    pub student_uni: String,

    pub tuition_type: TuitionType,
    pub semester: Semester,

    /// Academic year
    pub year: i32,

    /// At most two fractional digits
    pub amount: Decimal,

    pub due_date: NaiveDate,
}

// ============================================================================
// UPDATE
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TuitionUpdate {
    pub student_uni: Patch<String>,
    pub tuition_type: Patch<TuitionType>,
    pub semester: Patch<Semester>,
    pub year: Patch<i32>,
    pub amount: Patch<Decimal>,
    pub due_date: Patch<NaiveDate>,
}

impl Merge<Tuition> for TuitionUpdate {
    fn merge_into(self, target: &mut Tuition) {
        self.student_uni.apply_to(&mut target.student_uni);
        self.tuition_type.apply_to(&mut target.tuition_type);
        self.semester.apply_to(&mut target.semester);
        self.year.apply_to(&mut target.year);
        self.amount.apply_to(&mut target.amount);
        self.due_date.apply_to(&mut target.due_date);
    }
}

// ============================================================================
// QUERY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TuitionQuery {
    pub student_uni: Option<String>,
    pub tuition_type: Option<TuitionType>,
    pub semester: Option<Semester>,
    pub year: Option<i32>,
}

impl Filter<Tuition> for TuitionQuery {
    fn matches(&self, tuition: &Tuition) -> bool {
        filter::eq(&self.student_uni, &tuition.student_uni)
            && filter::eq(&self.tuition_type, &tuition.tuition_type)
            && filter::eq(&self.semester, &tuition.semester)
            && filter::eq(&self.year, &tuition.year)
    }
}
