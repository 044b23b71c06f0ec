use crate::execution::ResolverError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// The coerced argument values passed to a field resolver, keyed by
/// argument name in the order the field definition declares them.
///
/// Arguments that were neither provided nor defaulted are absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(IndexMap<String, JsonValue>);
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.0.get(name)
    }

    /// Deserializes the named argument into `T`. An absent argument
    /// deserializes from `null`, so `Option<T>` handles optional arguments.
    ///
    /// ```rust
    /// use libgql_core::execution::Arguments;
    ///
    /// let args: Arguments = [("first".to_string(), serde_json::json!(10))]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(args.get_as::<u32>("first").unwrap(), 10);
    /// assert_eq!(args.get_as::<Option<String>>("after").unwrap(), None);
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ResolverError> {
        let value = self.0.get(name).cloned().unwrap_or(JsonValue::Null);
        serde_json::from_value(value).map_err(|err| {
            ResolverError::new(format!("Invalid value for argument '{name}': {err}"))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn insert(&mut self, name: String, value: JsonValue) {
        self.0.insert(name, value);
    }
}
impl FromIterator<(String, JsonValue)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
