// 🏅 Scholarship Entity - an award with a sponsoring organization

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::{self, Filter};
use crate::merge::Merge;
use crate::patch::Patch;

// ============================================================================
// SCHOLARSHIP TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScholarshipType {
    AcademicMerit,
    NeedBased,
    Research,
    Departmental,
}

// ============================================================================
// FIELDS
// ============================================================================

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,
    pub scholarship_type: ScholarshipType,

    /// Organization or department sponsoring the award
    pub sponsor_organization: String,

    /// Per award period, at most two fractional digits
    pub amount: Decimal,

    /// Currently accepting applications (defaults to true)
    #[serde(default = "default_active")]
    pub is_active: bool,
}

// ============================================================================
// UPDATE
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScholarshipUpdate {
    pub name: Patch<String>,
    pub scholarship_type: Patch<ScholarshipType>,
    pub sponsor_organization: Patch<String>,
    pub amount: Patch<Decimal>,
    pub is_active: Patch<bool>,
}

impl Merge<Scholarship> for ScholarshipUpdate {
    fn merge_into(self, target: &mut Scholarship) {
        self.name.apply_to(&mut target.name);
        self.scholarship_type.apply_to(&mut target.scholarship_type);
        self.sponsor_organization.apply_to(&mut target.sponsor_organization);
        self.amount.apply_to(&mut target.amount);
        self.is_active.apply_to(&mut target.is_active);
    }
}

// ============================================================================
// QUERY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScholarshipQuery {
    pub scholarship_type: Option<ScholarshipType>,

    /// Case-insensitive partial match
    pub sponsor_organization: Option<String>,

    pub is_active: Option<bool>,
}

impl Filter<Scholarship> for ScholarshipQuery {
    fn matches(&self, scholarship: &Scholarship) -> bool {
        filter::eq(&self.scholarship_type, &scholarship.scholarship_type)
            && filter::contains_ci(&self.sponsor_organization, &scholarship.sponsor_organization)
            && filter::eq(&self.is_active, &scholarship.is_active)
    }
}
