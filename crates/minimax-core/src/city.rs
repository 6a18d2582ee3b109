/// Opaque city identifier.
///
/// A `City` is an index into the city list of the [`DistanceTable`] that
/// produced it. Cities from one table are meaningless in another.
///
/// [`DistanceTable`]: crate::DistanceTable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City(usize);

impl City {
    /// Create a city from a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index of this city in its table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for City {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
