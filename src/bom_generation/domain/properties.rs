/// An insertion-order-preserving string-to-string map.
///
/// POM properties are rendered in the order they were added, so a plain
/// sorted or hashed map is not suitable. Re-inserting an existing key
/// replaces its value and moves the key to the end of the order, matching
/// plain put-then-iterate expectations. The value is owned and passed
/// through the pipeline; there is no shared state between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedProperties {
    entries: Vec<(String, String)>,
}

impl OrderedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. A replaced key moves to the end of
    /// the insertion order.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries.retain(|(existing, _)| *existing != key);
        self.entries.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Appends all entries of `other`, preserving their relative order.
    pub fn extend(&mut self, other: OrderedProperties) {
        for (key, value) in other.entries {
            self.put(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
