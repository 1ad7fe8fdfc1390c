//! Ordered (tag, value) sequences

use super::Value;
use std::ops::Index;

/// Ordered sequence of (tag, value) pairs.
///
/// Used both for tagged pairlists on the wire and for vectors carrying a
/// `names` attribute. Unlike a map, order is preserved and tags may repeat.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaggedList {
    entries: Vec<(Value, Value)>,
}

impl TaggedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair each name with the value at the same position
    pub fn from_names(names: Vec<String>, values: Vec<Value>) -> Self {
        Self {
            entries: names.into_iter().map(Value::Str).zip(values).collect(),
        }
    }

    pub fn push(&mut self, tag: Value, value: Value) {
        self.entries.push((tag, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value whose tag equals `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(tag, _)| tag.as_str() == Some(name))
            .map(|(_, v)| v)
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|(_, v)| v)
    }

    /// Tags as strings, `None` for tags that are not symbols or strings
    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }
}

impl From<Vec<(Value, Value)>> for TaggedList {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for TaggedList {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaggedList {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Index<usize> for TaggedList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.entries[index].1
    }
}

impl Index<&str> for TaggedList {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(v) => v,
            None => panic!("no entry tagged {:?}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaggedList {
        TaggedList::from_names(
            vec!["a".into(), "b".into()],
            vec![Value::Double(1.0), Value::Str("x".into())],
        )
    }

    #[test]
    fn test_lookup_by_name_and_position() {
        let list = sample();
        assert_eq!(list["a"], Value::Double(1.0));
        assert_eq!(list[1], Value::Str("x".into()));
        assert_eq!(list.get("c"), None);
        assert_eq!(list.get_index(2), None);
    }

    #[test]
    fn test_keys_preserve_order() {
        let list = sample();
        let keys: Vec<_> = list.keys().collect();
        assert_eq!(keys, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_symbol_tags_match() {
        let mut list = TaggedList::new();
        list.push(Value::Symbol("dim".into()), Value::Int(3));
        list.push(Value::Null, Value::Int(4));
        assert_eq!(list.get("dim"), Some(&Value::Int(3)));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![Some("dim"), None]);
    }

    #[test]
    #[should_panic]
    fn test_index_missing_name_panics() {
        let _ = &sample()["missing"];
    }
}
