// 🎛️ Resource Controller - Store + Merge + Filter per entity kind
//
// Record lifecycle:
//   nonexistent -> active (create)
//   active -> active (update / replace)
//   active -> deleted (delete, terminal; Disposable kinds only)

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::entities::{Disposable, Entity};
use crate::error::StoreResult;
use crate::filter;
use crate::record::Record;
use crate::store::Store;

pub struct Controller<T: Entity> {
    store: Store<T>,
}

fn logged<R>(result: StoreResult<R>, operation: &str) -> StoreResult<R> {
    if let Err(err) = &result {
        warn!(kind = %err.kind(), id = %err.id(), operation, "{}", err);
    }
    result
}

impl<T: Entity> Controller<T> {
    pub fn new() -> Self {
        Self::with_store(Store::new(T::KIND))
    }

    /// Wrap an existing store (e.g. pre-seeded)
    pub fn with_store(store: Store<T>) -> Self {
        Controller { store }
    }

    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Assign id + timestamps and store the new record
    pub fn create(&self, fields: T) -> StoreResult<Record<T>> {
        let record = Record::new(fields);
        logged(self.store.insert(record.clone()), "create")?;

        info!(kind = %T::KIND, id = %record.id, "created");
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> StoreResult<Record<T>> {
        logged(self.store.get(id), "get")
    }

    /// Every record satisfying all supplied query parameters
    pub fn list(&self, query: &T::Query) -> Vec<Record<T>> {
        let all = self.store.list();
        let total = all.len();
        let matched = filter::apply(all, query);

        debug!(kind = %T::KIND, total, matched = matched.len(), "listed");
        matched
    }

    /// Merge a sparse update into the stored record
    pub fn update(&self, id: Uuid, update: T::Update) -> StoreResult<Record<T>> {
        let updated = logged(
            self.store.modify(id, |current| current.merged(update)),
            "update",
        )?;

        info!(kind = %T::KIND, id = %id, "updated");
        Ok(updated)
    }
}

impl<T: Disposable> Controller<T> {
    /// Swap every domain field, keeping id and created_at
    pub fn replace(&self, id: Uuid, fields: T) -> StoreResult<Record<T>> {
        let replaced = logged(
            self.store.modify(id, |current| current.replaced(fields)),
            "replace",
        )?;

        info!(kind = %T::KIND, id = %id, "replaced");
        Ok(replaced)
    }

    pub fn delete(&self, id: Uuid) -> StoreResult<()> {
        logged(self.store.delete(id), "delete")?;

        info!(kind = %T::KIND, id = %id, "deleted");
        Ok(())
    }
}

impl<T: Entity> Default for Controller<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Address, Person, PersonQuery, PersonUpdate, Scholarship, ScholarshipQuery,
        ScholarshipType, ScholarshipUpdate, Semester, Tuition, TuitionQuery, TuitionType,
        TuitionUpdate,
    };
    use crate::error::StoreError;
    use crate::patch::Patch;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tuition(uni: &str, semester: Semester, year: i32) -> Tuition {
        Tuition {
            student_uni: uni.to_string(),
            tuition_type: TuitionType::Tuition,
            semester,
            year,
            amount: dec("25000.00"),
            due_date: NaiveDate::from_ymd_opt(year, 8, 15).unwrap(),
        }
    }

    fn scholarship(sponsor: &str, active: bool) -> Scholarship {
        Scholarship {
            name: "Support Grant".to_string(),
            scholarship_type: ScholarshipType::NeedBased,
            sponsor_organization: sponsor.to_string(),
            amount: dec("3000.00"),
            is_active: active,
        }
    }

    fn person(uni: &str, cities: &[&str]) -> Person {
        Person {
            uni: uni.to_string(),
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: format!("{}@columbia.edu", uni),
            phone: None,
            birth_date: None,
            addresses: cities
                .iter()
                .map(|city| Address::new("1 College Walk", city, "USA"))
                .collect(),
        }
    }

    #[test]
    fn test_tuition_lifecycle() {
        let controller: Controller<Tuition> = Controller::new();

        let created = controller.create(tuition("vv2418", Semester::Fall, 2024)).unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let update = TuitionUpdate {
            amount: Patch::Set(dec("30000.00")),
            ..Default::default()
        };
        let updated = controller.update(created.id, update).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.amount, dec("30000.00"));
        assert_eq!(updated.fields.semester, Semester::Fall);
        assert_eq!(controller.get(created.id).unwrap(), updated);

        controller.delete(created.id).unwrap();
        assert!(matches!(
            controller.get(created.id),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            controller.delete(created.id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let controller: Controller<Person> = Controller::new();
        let id = Uuid::new_v4();

        let result = controller.update(id, PersonUpdate::default());

        assert_eq!(
            result,
            Err(StoreError::NotFound {
                kind: crate::record::EntityKind::Person,
                id
            })
        );
    }

    #[test]
    fn test_empty_update_only_advances_updated_at() {
        let controller: Controller<Scholarship> = Controller::new();
        let created = controller.create(scholarship("Alumni Association", true)).unwrap();

        let updated = controller.update(created.id, ScholarshipUpdate::default()).unwrap();

        assert_eq!(updated.fields, created.fields);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_replace_preserves_provenance() {
        let controller: Controller<Tuition> = Controller::new();
        let created = controller.create(tuition("vv2418", Semester::Fall, 2024)).unwrap();

        let replacement = tuition("xy123", Semester::Spring, 2025);
        let replaced = controller.replace(created.id, replacement.clone()).unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.created_at, created.created_at);
        assert!(replaced.updated_at >= created.updated_at);
        assert_eq!(replaced.fields, replacement);
    }

    #[test]
    fn test_replace_missing_is_not_found() {
        let controller: Controller<Scholarship> = Controller::new();

        let result = controller.replace(Uuid::new_v4(), scholarship("X", true));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_list_filters_conjunction() {
        let controller: Controller<Tuition> = Controller::new();
        controller.create(tuition("vv2418", Semester::Fall, 2024)).unwrap();
        controller.create(tuition("vv2418", Semester::Spring, 2025)).unwrap();
        controller.create(tuition("xy123", Semester::Fall, 2024)).unwrap();

        assert_eq!(controller.list(&TuitionQuery::default()).len(), 3);

        let query = TuitionQuery {
            student_uni: Some("vv2418".to_string()),
            semester: Some(Semester::Fall),
            ..Default::default()
        };
        let matched = controller.list(&query);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].fields.year, 2024);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let controller: Controller<Scholarship> = Controller::new();
        let first = controller.create(scholarship("Columbia Alumni", true)).unwrap();
        controller.create(scholarship("Law School", true)).unwrap();
        let third = controller.create(scholarship("ALUMNI fund", false)).unwrap();

        let query = ScholarshipQuery {
            sponsor_organization: Some("alumni".to_string()),
            ..Default::default()
        };
        let ids: Vec<Uuid> = controller.list(&query).iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[test]
    fn test_person_nested_city_filter() {
        let controller: Controller<Person> = Controller::new();
        let both = controller.create(person("ab123", &["A", "B"])).unwrap();
        controller.create(person("cd456", &["C"])).unwrap();

        let by_city = |city: &str| {
            controller.list(&PersonQuery {
                city: Some(city.to_string()),
                ..Default::default()
            })
        };

        assert_eq!(by_city("A")[0].id, both.id);
        assert_eq!(by_city("B")[0].id, both.id);
        assert_eq!(by_city("B").len(), 1);
        assert!(by_city("Z").is_empty());
    }

    #[test]
    fn test_embedded_address_is_a_copy() {
        let addresses: Controller<Address> = Controller::new();
        let persons: Controller<Person> = Controller::new();

        let stored = addresses
            .create(Address::new("1 College Walk", "New York", "USA"))
            .unwrap();
        let mut owner = person("ab123", &[]);
        owner.addresses.push(stored.fields.clone());
        let owner = persons.create(owner).unwrap();

        let update = crate::entities::AddressUpdate {
            city: Patch::Set("Boston".to_string()),
            ..Default::default()
        };
        addresses.update(stored.id, update).unwrap();

        let owner = persons.get(owner.id).unwrap();
        assert_eq!(owner.fields.addresses[0].city, "New York");
    }
}
