use serde_json::Value;

/// Rebuild a configuration tree out of fresh containers.
///
/// The input arrives through a host bridge and may alias containers owned by
/// the caller; the resolver only ever works on its own copy. Mappings and
/// sequences are rebuilt recursively and scalars are copied, so the result
/// is structurally identical to the input with sequence order preserved.
/// There is no failure path: a missing value is the container's normal
/// missing-key state, not an error.
pub fn sanitize(value: &Value) -> Value {
	match value {
		Value::Object(map) => Value::Object(map.iter().map(|(key, entry)| (key.clone(), sanitize(entry))).collect()),
		Value::Array(entries) => Value::Array(entries.iter().map(sanitize).collect()),
		scalar => scalar.clone(),
	}
}
