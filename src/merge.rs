// 🔀 Merge Engine - sparse update payload onto a stored record
//
// Contract:
// - every Patch::Set field overwrites the stored value (falsy values included)
// - every Patch::Absent field is copied unchanged
// - id and created_at are never touched
// - updated_at is refreshed even when nothing changed
//
// Payloads arrive pre-validated; merging never fails.

use crate::record::Record;

/// Implemented by each entity's update payload
pub trait Merge<T> {
    /// Write the set fields into `target`
    fn merge_into(self, target: &mut T);
}

impl<T: Clone> Record<T> {
    /// New full record = stored record + update payload
    pub fn merged<U>(&self, update: U) -> Record<T>
    where
        U: Merge<T>,
    {
        let mut next = self.clone();
        update.merge_into(&mut next.fields);
        next.touched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    #[derive(Debug, Clone, PartialEq)]
    struct Fields {
        name: String,
        active: bool,
        count: i32,
    }

    #[derive(Default)]
    struct FieldsUpdate {
        name: Patch<String>,
        active: Patch<bool>,
        count: Patch<i32>,
    }

    impl Merge<Fields> for FieldsUpdate {
        fn merge_into(self, target: &mut Fields) {
            self.name.apply_to(&mut target.name);
            self.active.apply_to(&mut target.active);
            self.count.apply_to(&mut target.count);
        }
    }

    fn stored() -> Record<Fields> {
        Record::new(Fields {
            name: "Original".to_string(),
            active: true,
            count: 7,
        })
    }

    #[test]
    fn test_empty_update_changes_nothing_but_updated_at() {
        let original = stored();
        let merged = original.merged(FieldsUpdate::default());

        assert_eq!(merged.fields, original.fields);
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.created_at, original.created_at);
        assert!(merged.updated_at >= original.updated_at);
    }

    #[test]
    fn test_set_fields_overwrite_absent_fields_kept() {
        let original = stored();
        let merged = original.merged(FieldsUpdate {
            count: Patch::Set(42),
            ..Default::default()
        });

        assert_eq!(merged.fields.count, 42);
        assert_eq!(merged.fields.name, "Original");
        assert!(merged.fields.active);
    }

    #[test]
    fn test_zero_values_count_as_set() {
        let original = stored();
        let merged = original.merged(FieldsUpdate {
            name: Patch::Set(String::new()),
            active: Patch::Set(false),
            count: Patch::Set(0),
        });

        assert_eq!(merged.fields.name, "");
        assert!(!merged.fields.active);
        assert_eq!(merged.fields.count, 0);
    }

    #[test]
    fn test_merge_does_not_mutate_source() {
        let original = stored();
        let _ = original.merged(FieldsUpdate {
            name: Patch::Set("Changed".to_string()),
            ..Default::default()
        });

        assert_eq!(original.fields.name, "Original");
    }
}
