use scalargrad_core::ScalarGradError;

/// Represents a dataset that can be accessed by index.
///
/// Items hold plain numbers rather than graph nodes: a `Value` is tied to
/// the thread that builds its graph, while samples can be loaded, stored
/// and shared freely before being turned into leaves for a forward pass.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
