//! AttrMap — the numeric attribute store on nodes and edges.

use hashbrown::HashMap;

/// A map of attribute names to numeric values.
pub type AttrMap = HashMap<String, f64>;

/// Anything that carries an attribute map. Nodes and edges both do, and the
/// attribute-driven orderings are generic over this seam.
pub trait HasAttributes {
    fn attributes(&self) -> &AttrMap;
}

impl HasAttributes for super::Node {
    fn attributes(&self) -> &AttrMap {
        &self.attributes
    }
}

impl HasAttributes for super::Edge {
    fn attributes(&self) -> &AttrMap {
        &self.attributes
    }
}

/// Arithmetic mean of all present attribute values, `None` for an empty map.
pub fn attribute_mean(attrs: &AttrMap) -> Option<f64> {
    if attrs.is_empty() {
        return None;
    }
    Some(attrs.values().sum::<f64>() / attrs.len() as f64)
}

/// Every attribute label occurring across the given items, sorted.
///
/// Sorted rather than first-seen so the result does not depend on map
/// iteration order.
pub fn attribute_labels<T: HasAttributes>(items: &[T]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for item in items {
        for label in item.attributes().keys() {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.clone());
            }
        }
    }
    labels.sort();
    labels
}
