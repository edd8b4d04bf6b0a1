//! Column descriptors and row identity

use super::record::{display_value, resolve_path};
use dioxus::prelude::Element;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Custom cell renderer
pub type CellRenderer<T> = Rc<dyn Fn(&T) -> Element>;
/// Custom sort comparison
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// One table column.
///
/// `key` is a dot path into the record and doubles as the sort key.
pub struct Column<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub render: Option<CellRenderer<T>>,
    pub compare: Option<Comparator<T>>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            render: None,
            compare: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: impl Fn(&T) -> Element + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Replace the default type-aware comparison for this column
    pub fn compare_with(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Rc::new(compare));
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            render: self.render.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && same_rc(&self.render, &other.render)
            && same_rc(&self.compare, &other.compare)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .field("compare", &self.compare.is_some())
            .finish()
    }
}

fn same_rc<F: ?Sized>(a: &Option<Rc<F>>, b: &Option<Rc<F>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Per-row control cluster rendered in the trailing "Actions" column
pub struct RowActions<T>(pub Rc<dyn Fn(&T) -> Element>);

impl<T> RowActions<T> {
    pub fn new(render: impl Fn(&T) -> Element + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn render(&self, record: &T) -> Element {
        (self.0)(record)
    }
}

impl<T> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for RowActions<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// How a row's render key is derived
pub enum RowKeyStrategy<T> {
    /// Value at a dot path; rows missing it fall back to their position
    Field(String),
    /// Caller-supplied key function
    Extract(Rc<dyn Fn(&T) -> String>),
    /// `id`, then `uid`, then `_id`, then position
    Conventional,
    /// Position in `data`. Keys shift when rows are inserted or removed.
    Index,
}

impl<T> RowKeyStrategy<T> {
    pub fn field(path: impl Into<String>) -> Self {
        RowKeyStrategy::Field(path.into())
    }

    pub fn extract(key: impl Fn(&T) -> String + 'static) -> Self {
        RowKeyStrategy::Extract(Rc::new(key))
    }

    /// Key for `record` at `index`; `value` is the record's serialized form
    pub fn key_for(&self, record: &T, value: &Value, index: usize) -> RowKey {
        let stable = |path: &str| resolve_path(value, path).map(|v| RowKey::Stable(display_value(v)));
        let key = match self {
            RowKeyStrategy::Field(path) => stable(path.as_str()),
            RowKeyStrategy::Extract(extract) => Some(RowKey::Stable(extract(record))),
            RowKeyStrategy::Conventional => ["id", "uid", "_id"].into_iter().find_map(stable),
            RowKeyStrategy::Index => None,
        };
        key.unwrap_or(RowKey::Positional(index))
    }
}

impl<T> Default for RowKeyStrategy<T> {
    fn default() -> Self {
        RowKeyStrategy::Conventional
    }
}

impl<T> Clone for RowKeyStrategy<T> {
    fn clone(&self) -> Self {
        match self {
            RowKeyStrategy::Field(path) => RowKeyStrategy::Field(path.clone()),
            RowKeyStrategy::Extract(extract) => RowKeyStrategy::Extract(extract.clone()),
            RowKeyStrategy::Conventional => RowKeyStrategy::Conventional,
            RowKeyStrategy::Index => RowKeyStrategy::Index,
        }
    }
}

impl<T> PartialEq for RowKeyStrategy<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RowKeyStrategy::Field(a), RowKeyStrategy::Field(b)) => a == b,
            (RowKeyStrategy::Extract(a), RowKeyStrategy::Extract(b)) => Rc::ptr_eq(a, b),
            (RowKeyStrategy::Conventional, RowKeyStrategy::Conventional) => true,
            (RowKeyStrategy::Index, RowKeyStrategy::Index) => true,
            _ => false,
        }
    }
}

/// Render key of one row.
///
/// Both forms carry their own prefix so a stable value such as `idx-3`
/// never collides with a positional key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Stable(String),
    Positional(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Stable(key) => write!(f, "key-{}", key),
            RowKey::Positional(index) => write!(f, "idx-{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use serde_json::json;

    struct Row;

    #[test]
    fn test_field_key_ignores_position() {
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::field("email");
        let value = json!({"email": "a@x.io"});
        assert_eq!(strategy.key_for(&Row, &value, 0), strategy.key_for(&Row, &value, 7));
        assert_eq!(strategy.key_for(&Row, &value, 3).to_string(), "key-a@x.io");
    }

    #[test]
    fn test_field_key_falls_back_to_index() {
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::field("email");
        let key = strategy.key_for(&Row, &json!({"name": "x"}), 4);
        assert_eq!(key, RowKey::Positional(4));
        assert_eq!(key.to_string(), "idx-4");
    }

    #[test]
    fn test_conventional_chain() {
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::default();
        assert_eq!(strategy.key_for(&Row, &json!({"id": "r1", "uid": "u1"}), 0), RowKey::Stable("r1".into()));
        assert_eq!(strategy.key_for(&Row, &json!({"uid": "u1", "_id": "m1"}), 0), RowKey::Stable("u1".into()));
        assert_eq!(strategy.key_for(&Row, &json!({"_id": "m1"}), 0), RowKey::Stable("m1".into()));
        assert_eq!(strategy.key_for(&Row, &json!({"id": 42}), 0), RowKey::Stable("42".into()));
        assert_eq!(strategy.key_for(&Row, &json!({"name": "x"}), 2), RowKey::Positional(2));
    }

    #[test]
    fn test_stable_and_positional_keys_never_collide() {
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::field("id");
        let lookalike = strategy.key_for(&Row, &json!({"id": "idx-3"}), 0);
        let positional = strategy.key_for(&Row, &json!({}), 3);
        assert_eq!(lookalike, RowKey::Stable("idx-3".into()));
        assert_eq!(positional, RowKey::Positional(3));
        assert_ne!(lookalike.to_string(), positional.to_string());
    }

    #[test]
    fn test_extract_and_index() {
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::extract(|_| "fixed".to_string());
        assert_eq!(strategy.key_for(&Row, &json!({}), 9), RowKey::Stable("fixed".into()));
        let strategy: RowKeyStrategy<Row> = RowKeyStrategy::Index;
        assert_eq!(strategy.key_for(&Row, &json!({"id": "x"}), 9), RowKey::Positional(9));
    }

    #[test]
    fn test_column_equality_tracks_renderer_identity() {
        let column: Column<Row> = Column::new("name", "Name").sortable();
        assert_eq!(column.clone(), column);
        let rendered = column.clone().render(|_| rsx! {});
        assert_ne!(rendered, column);
        assert_eq!(rendered.clone(), rendered);
    }
}
