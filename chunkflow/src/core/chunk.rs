//! The unit of work handed from a provider to a processor.

/// A bounded, ordered batch of items plus an end-of-input marker.
///
/// An end-marked chunk carries no work: the tasklet finishes without handing
/// it to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    items: Vec<T>,
    end: bool,
}

impl<T> Chunk<T> {
    /// Creates an empty, non-end chunk.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            end: false,
        }
    }

    /// Creates an empty chunk marked as end of input.
    #[must_use]
    pub fn end() -> Self {
        Self {
            items: Vec::new(),
            end: true,
        }
    }

    /// Creates a non-end chunk from existing items.
    #[must_use]
    pub fn with_items(items: Vec<T>) -> Self {
        Self { items, end: false }
    }

    /// Appends an item.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Marks this chunk as the end of input.
    pub fn set_end(&mut self) {
        self.end = true;
    }

    /// Returns true if the provider found no further input.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all items. The end marker is left as is.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the chunk, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Chunk<T> {
    fn from(items: Vec<T>) -> Self {
        Self::with_items(items)
    }
}

impl<T> FromIterator<T> for Chunk<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_items(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
