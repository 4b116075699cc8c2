// ✏️ Patch<T> - "field omitted" vs "field explicitly set"
//
// Update payloads wrap every field in Patch<T>. A missing JSON key
// deserializes to Absent (via #[serde(default)]); any present key, even
// "", false, 0 or null (for nullable fields), becomes Set(value).

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not supplied - keep the stored value
    Absent,

    /// Key supplied - overwrite with this value
    Set(T),
}

impl<T> Patch<T> {
    /// Overwrite `target` when set; returns whether it wrote
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Patch::Set(value) => {
                *target = value;
                true
            }
            Patch::Absent => false,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present
        T::deserialize(deserializer).map(Patch::Set)
    }
}
