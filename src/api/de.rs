//! Lenient field decoding shared by every response shape.

// self
use crate::_prelude::*;

/// Decodes an explicit JSON `null` as the type's zero value.
///
/// Pair with `#[serde(default)]` so absent fields take the same path.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: serde::Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
