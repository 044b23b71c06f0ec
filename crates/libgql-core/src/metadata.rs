//! A typed, heterogeneous side-table attached to schema elements.
//!
//! Each entry is keyed by a `static` [`MetadataKey<T>`] and keyed by that
//! static's address, so two keys with the same name are still distinct.
//! Values come back out only as the `T` their key was declared with.
//!
//! ```rust
//! use libgql_core::metadata::Metadata;
//! use libgql_core::metadata::MetadataKey;
//!
//! static COST: MetadataKey<u32> = MetadataKey::new("cost");
//!
//! let mut metadata = Metadata::new();
//! metadata.insert(&COST, 5);
//! assert_eq!(metadata.get(&COST), Some(&5));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Identifies one metadata slot and the type of value stored in it.
///
/// Keys must be declared as `static` items: a `const` key would be
/// duplicated at each use site and would not have a stable address.
pub struct MetadataKey<T: 'static> {
    name: &'static str,
    phantom: PhantomData<fn() -> T>,
}
impl<T: 'static> MetadataKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn id(&'static self) -> usize {
        self as *const Self as usize
    }
}
impl<T: 'static> std::fmt::Debug for MetadataKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MetadataKey({})", self.name)
    }
}

struct MetadataEntry {
    name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// A map from [`MetadataKey`]s to values of their declared types.
///
/// Cloning is cheap: values are reference counted.
#[derive(Default)]
pub struct Metadata {
    entries: HashMap<usize, MetadataEntry>,
}
impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert<T: Send + Sync + 'static>(
        &mut self,
        key: &'static MetadataKey<T>,
        value: T,
    ) {
        self.entries.insert(key.id(), MetadataEntry {
            name: key.name,
            value: Arc::new(value),
        });
    }

    pub fn get<T: Send + Sync + 'static>(
        &self,
        key: &'static MetadataKey<T>,
    ) -> Option<&T> {
        self.entries
            .get(&key.id())
            .and_then(|entry| entry.value.downcast_ref::<T>())
    }

    pub fn contains<T: 'static>(&self, key: &'static MetadataKey<T>) -> bool {
        self.entries.contains_key(&key.id())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn sorted_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        names
    }
}
impl Clone for Metadata {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(id, entry)| (*id, MetadataEntry {
                    name: entry.name,
                    value: Arc::clone(&entry.value),
                }))
                .collect(),
        }
    }
}
impl std::fmt::Debug for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.sorted_names()).finish()
    }
}
impl PartialEq for Metadata {
    /// Values are opaque, so two tables compare equal when they populate the
    /// same set of keys.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.keys().all(|id| other.entries.contains_key(id))
    }
}
