/*!
# Attribute Overlay

Typed key-value data attached to the graph, to vertices, and to edges.
Values are stored as an [`AttrValue`] and can only be read back as exactly the type they were
stored as: a `u64` stored under `"weight"` cannot be read as `i64` or `f64`.

```
use densegraph::attrs::*;

let mut attrs = Attrs::new();
attrs.insert("weight".into(), AttrValue::from(2.5));
assert_eq!(get_typed::<f64>(Some(&attrs), "weight"), Ok(2.5));
assert!(get_typed::<bool>(Some(&attrs), "weight").is_err());
```
*/

use std::{collections::BTreeMap, hash::Hash};

use fxhash::FxHashMap;

use crate::{
    edge::EdgeId,
    error::{GraphError, Result},
    vertex::VertexId,
};

/// A dynamically typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl AttrValue {
    /// Name of the Rust type this value is read back as
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Bool(_) => bool::TYPE_NAME,
            AttrValue::Int(_) => i64::TYPE_NAME,
            AttrValue::UInt(_) => u64::TYPE_NAME,
            AttrValue::Float(_) => f64::TYPE_NAME,
            AttrValue::Text(_) => String::TYPE_NAME,
            AttrValue::Bytes(_) => <Vec<u8>>::TYPE_NAME,
        }
    }
}

/// Types that can be read back from an [`AttrValue`]
pub trait AttrType: Sized {
    const TYPE_NAME: &'static str;

    /// Returns the value if it holds exactly `Self`
    fn from_value(value: &AttrValue) -> Option<Self>;
}

macro_rules! attr_types {
    ($($ty:ty => $variant:ident as $name:literal),* $(,)?) => {
        $(
            impl AttrType for $ty {
                const TYPE_NAME: &'static str = $name;

                #[allow(clippy::clone_on_copy)]
                fn from_value(value: &AttrValue) -> Option<Self> {
                    match value {
                        AttrValue::$variant(x) => Some(x.clone()),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for AttrValue {
                fn from(x: $ty) -> Self {
                    AttrValue::$variant(x)
                }
            }
        )*
    };
}

attr_types!(
    bool => Bool as "bool",
    i64 => Int as "i64",
    u64 => UInt as "u64",
    f64 => Float as "f64",
    String => Text as "String",
    Vec<u8> => Bytes as "Vec<u8>",
);

impl From<&str> for AttrValue {
    fn from(x: &str) -> Self {
        AttrValue::Text(x.to_string())
    }
}

/// Attributes of a single owner, ordered by key
pub type Attrs = BTreeMap<String, AttrValue>;

/// Reads `key` from `bucket` as a `T`
pub fn get_typed<T: AttrType>(bucket: Option<&Attrs>, key: &str) -> Result<T> {
    let value = bucket
        .and_then(|b| b.get(key))
        .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))?;

    T::from_value(value).ok_or_else(|| GraphError::TypeMismatch {
        key: key.to_string(),
        stored: value.type_name(),
        requested: T::TYPE_NAME,
    })
}

/// Attribute buckets of one kind of id; ids without attributes have no bucket
#[derive(Debug, Clone, PartialEq)]
pub struct AttrStore<I: Hash + Eq> {
    buckets: FxHashMap<I, Attrs>,
}

impl<I: Hash + Eq> Default for AttrStore<I> {
    fn default() -> Self {
        Self {
            buckets: FxHashMap::default(),
        }
    }
}

impl<I: Hash + Eq + Copy> AttrStore<I> {
    /// Returns all attributes of `id`
    pub fn attrs(&self, id: I) -> Option<&Attrs> {
        self.buckets.get(&id)
    }

    pub fn has(&self, id: I, key: &str) -> bool {
        self.attrs(id).is_some_and(|b| b.contains_key(key))
    }

    pub fn get<T: AttrType>(&self, id: I, key: &str) -> Result<T> {
        get_typed(self.attrs(id), key)
    }

    /// Stores `value` under `key`, returning the previous value
    pub fn set(&mut self, id: I, key: &str, value: AttrValue) -> Option<AttrValue> {
        self.buckets
            .entry(id)
            .or_default()
            .insert(key.to_string(), value)
    }

    /// Removes and returns the value stored under `key`
    pub fn remove(&mut self, id: I, key: &str) -> Result<AttrValue> {
        let bucket = self
            .buckets
            .get_mut(&id)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))?;
        let value = bucket
            .remove(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))?;

        if bucket.is_empty() {
            self.buckets.remove(&id);
        }
        Ok(value)
    }

    /// Drops the whole bucket of `id`
    pub fn forget(&mut self, id: I) -> Option<Attrs> {
        self.buckets.remove(&id)
    }

    /// Drops the buckets of all ids for which `doomed` returns *true*
    pub fn forget_if(&mut self, mut doomed: impl FnMut(I) -> bool) {
        self.buckets.retain(|id, _| !doomed(*id));
    }

    /// Number of ids with at least one attribute
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Attributes of a graph, its vertices, and its edges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrOverlay {
    pub(crate) graph: Attrs,
    pub(crate) vertices: AttrStore<VertexId>,
    pub(crate) edges: AttrStore<EdgeId>,
}

impl AttrOverlay {
    pub fn graph(&self) -> &Attrs {
        &self.graph
    }

    pub fn vertices(&self) -> &AttrStore<VertexId> {
        &self.vertices
    }

    pub fn edges(&self) -> &AttrStore<EdgeId> {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn exact_type_only() {
        let mut store = AttrStore::<VertexId>::default();
        store.set(0, "flag", true.into());
        store.set(0, "count", 3u64.into());
        store.set(0, "name", "zero".into());

        assert_eq!(store.get::<bool>(0, "flag"), Ok(true));
        assert_eq!(store.get::<u64>(0, "count"), Ok(3));
        assert_eq!(store.get::<String>(0, "name"), Ok("zero".to_string()));

        assert_eq!(
            store.get::<i64>(0, "count"),
            Err(GraphError::TypeMismatch {
                key: "count".into(),
                stored: "u64",
                requested: "i64"
            })
        );
        assert_eq!(
            store.get::<f64>(0, "flag").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            store.get::<bool>(0, "missing").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            store.get::<bool>(1, "flag").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn overwrite_and_remove() {
        let mut store = AttrStore::<EdgeId>::default();
        let e = EdgeId(1, 2);

        assert_eq!(store.set(e, "w", 1.5.into()), None);
        assert_eq!(store.set(e, "w", (-4i64).into()), Some(AttrValue::Float(1.5)));
        assert!(store.has(e, "w"));
        assert_eq!(store.get::<i64>(e, "w"), Ok(-4));

        assert_eq!(store.remove(e, "w"), Ok(AttrValue::Int(-4)));
        assert_eq!(
            store.remove(e, "w").unwrap_err(),
            GraphError::KeyNotFound("w".into())
        );
        // empty buckets are dropped
        assert!(store.is_empty());
    }

    #[test]
    fn forget_buckets() {
        let mut store = AttrStore::<EdgeId>::default();
        for i in 0..5 {
            store.set(EdgeId(i, i + 1), "i", i.into());
        }
        assert_eq!(store.len(), 5);

        assert!(store.forget(EdgeId(0, 1)).is_some());
        assert!(store.forget(EdgeId(0, 1)).is_none());

        store.forget_if(|e| e.is_incident_to(3));
        assert_eq!(store.len(), 2);
        assert!(store.has(EdgeId(1, 2), "i"));
        assert!(store.has(EdgeId(4, 5), "i"));
    }

    #[test]
    fn type_names() {
        assert_eq!(AttrValue::from(vec![1u8, 2]).type_name(), "Vec<u8>");
        assert_eq!(AttrValue::from("x").type_name(), "String");
        assert_eq!(AttrValue::from(0i64).type_name(), "i64");
    }
}
