// 🏠 Address Entity
//
// Stored on its own under /addresses, and also embedded by value
// inside Person.addresses.

use serde::{Deserialize, Serialize};

use crate::filter::{self, Filter};
use crate::merge::Merge;
use crate::patch::Patch;

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address and number
    pub street: String,

    pub city: String,

    /// State or region
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,

    pub country: String,
}

impl Address {
    pub fn new(street: &str, city: &str, country: &str) -> Self {
        Address {
            street: street.to_string(),
            city: city.to_string(),
            state: None,
            postal_code: None,
            country: country.to_string(),
        }
    }
}

// ============================================================================
// UPDATE
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressUpdate {
    pub street: Patch<String>,
    pub city: Patch<String>,
    pub state: Patch<Option<String>>,
    pub postal_code: Patch<Option<String>>,
    pub country: Patch<String>,
}

impl Merge<Address> for AddressUpdate {
    fn merge_into(self, target: &mut Address) {
        self.street.apply_to(&mut target.street);
        self.city.apply_to(&mut target.city);
        self.state.apply_to(&mut target.state);
        self.postal_code.apply_to(&mut target.postal_code);
        self.country.apply_to(&mut target.country);
    }
}

// ============================================================================
// QUERY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressQuery {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Filter<Address> for AddressQuery {
    fn matches(&self, address: &Address) -> bool {
        filter::eq(&self.street, &address.street)
            && filter::eq(&self.city, &address.city)
            && filter::eq_opt(&self.state, &address.state)
            && filter::eq_opt(&self.postal_code, &address.postal_code)
            && filter::eq(&self.country, &address.country)
    }
}
