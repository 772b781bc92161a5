//! Conversion between nested catalogs and flat dotted-key mappings.

use crate::Catalog;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Path separator used throughout the fill pipeline.
pub const SEPARATOR: &str = ".";

/// Sentinel key under which a displaced leaf is preserved when a flat key
/// prefix collides with another flat key (see [`unflatten`]).
pub const VALUE_KEY: &str = "_value";

/// Flattens a catalog into a single-level mapping keyed by dot-joined paths.
///
/// Traversal is depth-first in the catalog's insertion order. Nested objects
/// recurse; every other JSON value (string, number, boolean, array, null) is
/// emitted as a leaf.
pub fn flatten(catalog: &Catalog, sep: &str) -> IndexMap<String, Value> {
    let mut flat = IndexMap::new();
    flatten_into(catalog.root(), "", sep, &mut flat);
    flat
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, sep: &str, out: &mut IndexMap<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{sep}{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(nested, &path, sep, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuilds a nested catalog from a flat mapping.
///
/// Each key is split on `sep`; intermediate objects are created as needed and
/// the leaf is assigned at the final segment. When an intermediate segment
/// already holds a leaf (a prior flat key was a strict prefix of this one,
/// e.g. both `admin` and `admin.role` exist), the leaf is moved under the
/// [`VALUE_KEY`] sentinel inside a new object so no value is lost.
///
/// For any flat mapping that never triggers the sentinel,
/// `unflatten(flatten(c)) == c`.
pub fn unflatten(flat: &IndexMap<String, Value>, sep: &str) -> Catalog {
    let mut root = Map::new();
    for (path, value) in flat {
        let segments: Vec<&str> = path.split(sep).collect();
        let (last, parents) = segments
            .split_last()
            .expect("str::split yields at least one segment");

        let mut cursor = &mut root;
        for segment in parents {
            let slot = cursor
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                let displaced = slot.take();
                let mut shell = Map::new();
                shell.insert(VALUE_KEY.to_string(), displaced);
                *slot = Value::Object(shell);
            }
            cursor = slot
                .as_object_mut()
                .expect("slot was just ensured to be an object");
        }
        cursor.insert((*last).to_string(), value.clone());
    }
    Catalog::from_root(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: Value) -> Catalog {
        Catalog::try_from(value).unwrap()
    }

    #[test]
    fn test_flatten_nested_keys() {
        let c = catalog(json!({
            "common": {"actions": {"save": "Mentés"}, "title": "Cím"},
            "greeting": "Szia"
        }));
        let flat = flatten(&c, SEPARATOR);

        assert_eq!(flat["common.actions.save"], json!("Mentés"));
        assert_eq!(flat["common.title"], json!("Cím"));
        assert_eq!(flat["greeting"], json!("Szia"));
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_flatten_preserves_depth_first_order() {
        let c = catalog(json!({
            "b": {"z": "1", "a": "2"},
            "a": "3"
        }));
        let keys: Vec<String> = flatten(&c, SEPARATOR).keys().cloned().collect();
        assert_eq!(keys, ["b.z", "b.a", "a"]);
    }

    #[test]
    fn test_flatten_treats_arrays_and_scalars_as_leaves() {
        let c = catalog(json!({"items": ["a", "b"], "count": 2, "on": true}));
        let flat = flatten(&c, SEPARATOR);

        assert_eq!(flat["items"], json!(["a", "b"]));
        assert_eq!(flat["count"], json!(2));
        assert_eq!(flat["on"], json!(true));
    }

    #[test]
    fn test_unflatten_rebuilds_nesting() {
        let mut flat = IndexMap::new();
        flat.insert("a.b".to_string(), json!("Save"));
        flat.insert("a.c".to_string(), json!("Hello"));

        let c = unflatten(&flat, SEPARATOR);
        assert_eq!(c, catalog(json!({"a": {"b": "Save", "c": "Hello"}})));
    }

    #[test]
    fn test_roundtrip_without_prefix_collisions() {
        let original = catalog(json!({
            "nav": {"home": "Kezdőlap", "profile": {"edit": "Szerkesztés"}},
            "footer": {"legal": "Jogi"},
            "version": "1.0"
        }));
        let rebuilt = unflatten(&flatten(&original, SEPARATOR), SEPARATOR);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_prefix_collision_preserves_leaf_under_sentinel() {
        let mut flat = IndexMap::new();
        flat.insert("admin".to_string(), json!("x"));
        flat.insert("admin.role".to_string(), json!("y"));

        let c = unflatten(&flat, SEPARATOR);
        assert_eq!(c, catalog(json!({"admin": {"_value": "x", "role": "y"}})));
    }

    #[test]
    fn test_deep_prefix_collision() {
        let mut flat = IndexMap::new();
        flat.insert("a.b".to_string(), json!("leaf"));
        flat.insert("a.b.c.d".to_string(), json!("deep"));

        let c = unflatten(&flat, SEPARATOR);
        assert_eq!(
            c,
            catalog(json!({"a": {"b": {"_value": "leaf", "c": {"d": "deep"}}}}))
        );
    }

    #[test]
    fn test_custom_separator() {
        let c = catalog(json!({"a": {"b": "v"}}));
        let flat = flatten(&c, "/");
        assert_eq!(flat["a/b"], json!("v"));
        assert_eq!(unflatten(&flat, "/"), c);
    }
}
