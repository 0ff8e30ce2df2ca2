//! Live candidate lists.

/// Ordered candidate values still considered feasible for one variable.
///
/// Order is significant: it is the order values are tried in when value
/// ordering is disabled, and the tie-break order for LCV.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain<V> {
    values: Vec<V>,
}

impl<V> Domain<V> {
    /// Creates a domain from an ordered collection of values.
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of remaining values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether every value has been pruned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remaining values in order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterates over remaining values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Keeps only the values matching `keep`. Returns how many were removed.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&V) -> bool) -> usize {
        let before = self.values.len();
        self.values.retain(keep);
        before - self.values.len()
    }

    /// Installs `values` and hands back the previous contents.
    pub(crate) fn replace(&mut self, values: Vec<V>) -> Vec<V> {
        std::mem::replace(&mut self.values, values)
    }
}

impl<V: PartialEq> Domain<V> {
    /// Whether `value` is still a candidate.
    pub fn contains(&self, value: &V) -> bool {
        self.values.contains(value)
    }
}

impl<V> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, V> IntoIterator for &'a Domain<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
