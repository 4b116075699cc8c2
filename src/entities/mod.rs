// Entity Models
//
// Each entity kind has:
// - Fields: the full domain value (all required fields present)
// - Update: sparse payload, every field wrapped in Patch<T>
// - Query: optional filter parameters for list
//
// Person embeds Address values by copy; they have no lifecycle of their own.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::filter::Filter;
use crate::merge::Merge;
use crate::record::EntityKind;

pub mod address;
pub mod person;
pub mod scholarship;
pub mod tuition;

pub use address::{Address, AddressQuery, AddressUpdate};
pub use person::{Person, PersonQuery, PersonUpdate};
pub use scholarship::{Scholarship, ScholarshipQuery, ScholarshipType, ScholarshipUpdate};
pub use tuition::{Semester, Tuition, TuitionQuery, TuitionType, TuitionUpdate};

/// Binds a field type to its kind, update payload and query parameters
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    type Update: Merge<Self> + DeserializeOwned + Send + 'static;
    type Query: Filter<Self> + DeserializeOwned + Send + Sync + 'static;
}

/// Kinds that also support full replace and delete
pub trait Disposable: Entity {}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;
    type Update = AddressUpdate;
    type Query = AddressQuery;
}

impl Entity for Person {
    const KIND: EntityKind = EntityKind::Person;
    type Update = PersonUpdate;
    type Query = PersonQuery;
}

impl Entity for Tuition {
    const KIND: EntityKind = EntityKind::Tuition;
    type Update = TuitionUpdate;
    type Query = TuitionQuery;
}

impl Entity for Scholarship {
    const KIND: EntityKind = EntityKind::Scholarship;
    type Update = ScholarshipUpdate;
    type Query = ScholarshipQuery;
}

impl Disposable for Tuition {}
impl Disposable for Scholarship {}
