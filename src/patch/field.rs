use serde::{Deserialize, Deserializer};

/// One field of a partial update payload.
///
/// Serde collapses a missing key and an explicit `null` into `None`, so
/// patch structs use this wrapper with `#[serde(default)]`: a missing key
/// takes the `Default` (`Absent`), while a key that is present goes through
/// `Deserialize` and becomes `Null` or `Value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldUpdate::Value(value),
            None => FieldUpdate::Null,
        })
    }
}
