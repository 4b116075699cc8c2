// 👤 Person Entity - student/contact identity with embedded addresses
//
// addresses are owned copies: updating a stored Address never changes
// a Person, and PATCHing addresses replaces the whole list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::address::Address;
use crate::filter::{self, Filter};
use crate::merge::Merge;
use crate::patch::Patch;

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Columbia University UNI (e.g. "vv2418")
    pub uni: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    /// Ordered, possibly empty
    #[serde(default)]
    pub addresses: Vec<Address>,
}

// ============================================================================
// UPDATE
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonUpdate {
    pub uni: Patch<String>,
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub email: Patch<String>,
    pub phone: Patch<Option<String>>,
    pub birth_date: Patch<Option<NaiveDate>>,
    pub addresses: Patch<Vec<Address>>,
}

impl Merge<Person> for PersonUpdate {
    fn merge_into(self, target: &mut Person) {
        self.uni.apply_to(&mut target.uni);
        self.first_name.apply_to(&mut target.first_name);
        self.last_name.apply_to(&mut target.last_name);
        self.email.apply_to(&mut target.email);
        self.phone.apply_to(&mut target.phone);
        self.birth_date.apply_to(&mut target.birth_date);
        self.addresses.apply_to(&mut target.addresses);
    }
}

// ============================================================================
// QUERY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonQuery {
    pub uni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,

    /// Matches if ANY address has this city
    pub city: Option<String>,

    /// Matches if ANY address has this country
    pub country: Option<String>,
}

impl Filter<Person> for PersonQuery {
    fn matches(&self, person: &Person) -> bool {
        filter::eq(&self.uni, &person.uni)
            && filter::eq(&self.first_name, &person.first_name)
            && filter::eq(&self.last_name, &person.last_name)
            && filter::eq(&self.email, &person.email)
            && filter::eq_opt(&self.phone, &person.phone)
            && filter::eq_opt(&self.birth_date, &person.birth_date)
            && filter::any_eq(&self.city, &person.addresses, |a: &Address| &a.city)
            && filter::any_eq(&self.country, &person.addresses, |a: &Address| &a.country)
    }
}
