use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Feature properties with unique keys, serialized in key order.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoProperties {
	properties: BTreeMap<String, Value>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
		self.properties.insert(key.to_string(), value.into());
	}
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}
	/// Returns the value of `key` when it is a string.
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.properties.get(key).and_then(Value::as_str)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.properties.iter()
	}
}

impl From<Vec<(&str, Value)>> for GeoProperties {
	fn from(value: Vec<(&str, Value)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, Value)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn insert_replaces_existing_key() {
		let mut p = GeoProperties::new();
		p.insert("source", "draw");
		p.insert("source", "nspd");
		assert_eq!(p.len(), 1);
		assert_eq!(p.get_str("source"), Some("nspd"));
	}

	#[test]
	fn serializes_sorted() {
		let p = GeoProperties::from(vec![("source", json!("nspd")), ("cad_num", json!("1:2:3"))]);
		assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"cad_num":"1:2:3","source":"nspd"}"#);
	}

	#[test]
	fn remove_and_get() {
		let mut p = GeoProperties::from(vec![("a", json!(1))]);
		assert_eq!(p.get("a"), Some(&json!(1)));
		assert_eq!(p.remove("a"), Some(json!(1)));
		assert!(p.is_empty());
		assert!(p.get_str("a").is_none());
	}
}
