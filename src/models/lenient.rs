use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default, the same as a missing field.
///
/// The backend serializes absent columns as `null`; one such value must not
/// fail the whole list it arrives in.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
