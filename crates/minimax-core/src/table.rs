use std::fmt;

use crate::City;

/// Immutable table of edge weights between every ordered pair of cities.
///
/// The table is built once (see [`DistanceTable::builder`]) and then shared by
/// reference. Weights are stored in a flat row-major matrix; the diagonal is
/// always 0. Symmetry is a property of the supplied data and is never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTable", into = "RawTable")
)]
pub struct DistanceTable {
    labels: Vec<String>,
    weights: Vec<u32>,
}

impl DistanceTable {
    /// Start building a new table.
    pub fn builder() -> DistanceTableBuilder {
        DistanceTableBuilder::default()
    }

    /// The compiled-in four-city instance.
    ///
    /// ```text
    ///      A   B   C   D
    /// A    0  10  15  20
    /// B   10   0  35  25
    /// C   15  35   0  30
    /// D   20  25  30   0
    /// ```
    pub fn reference() -> Self {
        let mut weights = Vec::with_capacity(16);
        for row in REFERENCE_WEIGHTS {
            weights.extend_from_slice(&row);
        }
        Self {
            labels: REFERENCE_LABELS.iter().map(|s| s.to_string()).collect(),
            weights,
        }
    }

    /// Build a table from labels and a full square weight matrix.
    ///
    /// Diagonal entries are ignored and stored as 0.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<u32>>) -> Result<Self, GraphError> {
        check_unique(&labels)?;
        let n = labels.len();
        if rows.len() != n {
            return Err(GraphError::NotSquare {
                cities: n,
                rows: rows.len(),
            });
        }
        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::RaggedRow {
                    row: i,
                    len: row.len(),
                    cities: n,
                });
            }
            weights.extend(row.into_iter().enumerate().map(|(j, w)| if i == j { 0 } else { w }));
        }
        Ok(Self { labels, weights })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table holds no cities at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All cities in declaration order.
    pub fn cities(&self) -> impl ExactSizeIterator<Item = City> + '_ {
        (0..self.labels.len()).map(City::new)
    }

    /// Look up a city by label.
    pub fn city(&self, label: &str) -> Option<City> {
        self.labels.iter().position(|l| l == label).map(City::new)
    }

    /// Label of `city`, or `None` if it does not belong to this table.
    pub fn label(&self, city: City) -> Option<&str> {
        self.labels.get(city.index()).map(String::as_str)
    }

    /// Whether `city` belongs to this table.
    #[inline]
    pub fn contains(&self, city: City) -> bool {
        city.index() < self.labels.len()
    }

    /// Weight of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either city does not belong to this table.
    #[inline]
    pub fn distance(&self, from: City, to: City) -> u32 {
        let n = self.labels.len();
        assert!(
            from.index() < n && to.index() < n,
            "city outside distance table ({} cities)",
            n
        );
        self.weights[from.index() * n + to.index()]
    }
}

const REFERENCE_LABELS: [&str; 4] = ["A", "B", "C", "D"];

const REFERENCE_WEIGHTS: [[u32; 4]; 4] = [
    [0, 10, 15, 20],
    [10, 0, 35, 25],
    [15, 35, 0, 30],
    [20, 25, 30, 0],
];

fn check_unique(labels: &[String]) -> Result<(), GraphError> {
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(GraphError::DuplicateCity(label.clone()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Incremental constructor for [`DistanceTable`].
///
/// Cities are declared with [`city`](Self::city); weights with
/// [`edge`](Self::edge) (one direction) or [`connect`](Self::connect) (both).
/// [`build`](Self::build) requires a weight for every ordered pair of
/// distinct cities.
#[derive(Debug, Clone, Default)]
pub struct DistanceTableBuilder {
    labels: Vec<String>,
    edges: Vec<(String, String, u32)>,
}

impl DistanceTableBuilder {
    /// Declare a city.
    pub fn city(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Set the weight of the directed edge `from -> to`.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    /// Set the weight of both `a -> b` and `b -> a`.
    pub fn connect(self, a: impl Into<String>, b: impl Into<String>, weight: u32) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edge(a.clone(), b.clone(), weight).edge(b, a, weight)
    }

    /// Validate and produce the table. Later edges override earlier ones.
    pub fn build(self) -> Result<DistanceTable, GraphError> {
        check_unique(&self.labels)?;
        let n = self.labels.len();
        let index = |label: &str| {
            self.labels
                .iter()
                .position(|l| l == label)
                .ok_or_else(|| GraphError::UnknownCity(label.to_string()))
        };

        let mut cells: Vec<Option<u32>> = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(0);
        }
        for (from, to, weight) in &self.edges {
            let (i, j) = (index(from.as_str())?, index(to.as_str())?);
            if i != j {
                cells[i * n + j] = Some(*weight);
            }
        }

        let mut weights = Vec::with_capacity(n * n);
        for (k, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(w) => weights.push(w),
                None => {
                    return Err(GraphError::MissingEdge {
                        from: self.labels[k / n].clone(),
                        to: self.labels[k % n].clone(),
                    });
                }
            }
        }

        Ok(DistanceTable {
            labels: self.labels,
            weights,
        })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when constructing a [`DistanceTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The same label was declared twice.
    DuplicateCity(String),
    /// An edge names a label that was never declared.
    UnknownCity(String),
    /// No weight was given for an ordered pair of distinct cities.
    MissingEdge { from: String, to: String },
    /// The weight matrix row count does not match the city count.
    NotSquare { cities: usize, rows: usize },
    /// A weight matrix row length does not match the city count.
    RaggedRow { row: usize, len: usize, cities: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCity(label) => write!(f, "duplicate city \u{201c}{label}\u{201d}"),
            Self::UnknownCity(label) => write!(f, "unknown city \u{201c}{label}\u{201d}"),
            Self::MissingEdge { from, to } => write!(f, "no weight for edge {from} -> {to}"),
            Self::NotSquare { cities, rows } => {
                write!(f, "weight matrix has {rows} rows for {cities} cities")
            }
            Self::RaggedRow { row, len, cities } => {
                write!(f, "weight matrix row {row} has {len} entries for {cities} cities")
            }
        }
    }
}

impl std::error::Error for GraphError {}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawTable {
    cities: Vec<String>,
    weights: Vec<Vec<u32>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for DistanceTable {
    type Error = GraphError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        DistanceTable::from_rows(raw.cities, raw.weights)
    }
}

#[cfg(feature = "serde")]
impl From<DistanceTable> for RawTable {
    fn from(table: DistanceTable) -> Self {
        let n = table.labels.len();
        let weights = (0..n)
            .map(|i| table.weights[i * n..(i + 1) * n].to_vec())
            .collect();
        RawTable {
            cities: table.labels,
            weights,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_round_trip() {
        let t = DistanceTable::reference();
        let json = serde_json::to_string(&t).unwrap();
        let back: DistanceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn invalid_table_rejected() {
        let json = r#"{"cities":["A","A"],"weights":[[0,1],[1,0]]}"#;
        assert!(serde_json::from_str::<DistanceTable>(json).is_err());
    }
}
