//! Wire data model for module definitions.
//!
//! Insertion order of `inputs`/`logic`/`outputs` is significant: it flows
//! from the JSON text through enrichment into the rendered YAML unchanged,
//! so the maps here are vectors of pairs rather than hashed or sorted maps.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// String-keyed map that preserves insertion order.
///
/// JSON objects deserialize into this in document order; serialization and
/// iteration replay the same order. Re-inserting an existing key replaces
/// the value in place without moving the key.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Declared type tag for one module input. The tag is free-form text
/// (`"number"`, `"string"`, `"boolean"`, ...) and is never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    #[serde(rename = "type")]
    pub kind: String,
}

/// One `logic` or `outputs` entry: a scalar, an opaque expression string, a
/// sequence, or a nested insertion-ordered mapping.
///
/// `{{ ... }}` expression strings are stored and emitted verbatim; nothing
/// in this crate parses or evaluates them.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Seq(Vec<LogicValue>),
    Map(OrderedMap<LogicValue>),
}

impl LogicValue {
    /// Compact JSON text of the value, mapping entries in insertion order.
    pub fn to_compact_json(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        match self {
            LogicValue::Null => out.push_str("null"),
            LogicValue::Bool(true) => out.push_str("true"),
            LogicValue::Bool(false) => out.push_str("false"),
            LogicValue::Number(n) => out.push_str(&n.to_string()),
            LogicValue::String(s) => out.push_str(&json_escaped(s)),
            LogicValue::Seq(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_json(out);
                }
                out.push(']');
            }
            LogicValue::Map(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&json_escaped(key));
                    out.push(':');
                    value.write_json(out);
                }
                out.push('}');
            }
        }
    }
}

fn json_escaped(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

impl From<&str> for LogicValue {
    fn from(value: &str) -> Self {
        LogicValue::String(value.to_string())
    }
}

impl From<i64> for LogicValue {
    fn from(value: i64) -> Self {
        LogicValue::Number(serde_json::Number::from(value))
    }
}

impl From<f64> for LogicValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(LogicValue::Number)
            .unwrap_or(LogicValue::Null)
    }
}

impl From<bool> for LogicValue {
    fn from(value: bool) -> Self {
        LogicValue::Bool(value)
    }
}

impl Serialize for LogicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogicValue::Null => serializer.serialize_unit(),
            LogicValue::Bool(b) => serializer.serialize_bool(*b),
            LogicValue::Number(n) => n.serialize(serializer),
            LogicValue::String(s) => serializer.serialize_str(s),
            LogicValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            LogicValue::Map(entries) => entries.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogicValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LogicValueVisitor;

        impl<'de> Visitor<'de> for LogicValueVisitor {
            type Value = LogicValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(LogicValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(LogicValue::Number(serde_json::Number::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(LogicValue::Number(serde_json::Number::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(serde_json::Number::from_f64(v)
                    .map(LogicValue::Number)
                    .unwrap_or(LogicValue::Null))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LogicValue::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(LogicValue::String(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LogicValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LogicValue::Null)
            }

            fn visit_some<D2: Deserializer<'de>>(
                self,
                deserializer: D2,
            ) -> Result<Self::Value, D2::Error> {
                LogicValue::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = access.next_element()? {
                    items.push(item);
                }
                Ok(LogicValue::Seq(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, LogicValue>()? {
                    map.insert(key, value);
                }
                Ok(LogicValue::Map(map))
            }
        }

        deserializer.deserialize_any(LogicValueVisitor)
    }
}

/// Caller- or catalog-supplied description of one generated module.
///
/// `name` is required and doubles as the catalog lookup key and the output
/// filename stem; everything else is optional and independently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub inputs: OrderedMap<InputSpec>,
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub logic: OrderedMap<LogicValue>,
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub outputs: OrderedMap<LogicValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_map_preserves_json_document_order() {
        let map: OrderedMap<i64> = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reinsert_replaces_value_in_place() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 9);
        assert_eq!(map.get("a"), Some(&9));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn logic_value_deserializes_mixed_shapes() {
        let raw = r#"{"expr":"{{ a | abs }}","count":4,"ratio":0.5,"flag":true,"nested":{"x":1,"y":[1,2]}}"#;
        let value: LogicValue = serde_json::from_str(raw).unwrap();
        let LogicValue::Map(map) = &value else {
            panic!("expected a map");
        };
        assert_eq!(map.get("expr"), Some(&LogicValue::from("{{ a | abs }}")));
        assert_eq!(map.get("count"), Some(&LogicValue::from(4)));
        assert_eq!(map.get("flag"), Some(&LogicValue::Bool(true)));
    }

    #[test]
    fn compact_json_quotes_strings_and_keeps_order() {
        let value: LogicValue =
            serde_json::from_str(r#"{"relax":432,"focus":528,"deep_state":963,"sleep":396}"#)
                .unwrap();
        assert_eq!(
            value.to_compact_json(),
            r#"{"relax":432,"focus":528,"deep_state":963,"sleep":396}"#
        );
        assert_eq!(
            LogicValue::from("{{ x }}").to_compact_json(),
            r#""{{ x }}""#
        );
    }

    #[test]
    fn module_definition_defaults_optional_fields() {
        let def: ModuleDefinition = serde_json::from_str(r#"{"name":"custom"}"#).unwrap();
        assert_eq!(def.name, "custom");
        assert!(def.version.is_none());
        assert!(def.description.is_none());
        assert!(def.inputs.is_empty());
        assert!(def.logic.is_empty());
        assert!(def.outputs.is_empty());
    }

    #[test]
    fn module_definition_without_name_is_rejected() {
        assert!(serde_json::from_str::<ModuleDefinition>(r#"{"version":"2.0.0"}"#).is_err());
    }
}
