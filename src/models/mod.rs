use serde::{Deserialize, Deserializer};

pub mod inquiry;
pub mod transfer;

/// Reads an explicit JSON `null` as the field's default value.
pub fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
