//! Hierarchical paths addressing field instances inside the form value.
//!
//! A path is a sequence of segments: object keys and array indices. The
//! display form joins segments with `.` (`users.0.name`), which is also the
//! form accepted by [`FieldPath::parse`]. Paths are positional: moving a row
//! changes the path of every cell inside it.

use std::fmt;

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property key.
    Key(String),
    /// Array index.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Locator for one field instance within the form tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path. Purely numeric segments become indices.
    pub fn parse(input: &str) -> Self {
        let segments = input
            .split('.')
            .filter(|s| !s.is_empty())
            .map(|s| match s.parse::<usize>() {
                Ok(index) => Segment::Index(index),
                Err(_) => Segment::Key(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Build a path from explicit segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The segments of this path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a new path with `segment` appended.
    pub fn concat(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Return a new path with an array index appended.
    pub fn index(&self, index: usize) -> Self {
        self.concat(Segment::Index(index))
    }

    /// Return a new path with an object key appended.
    pub fn key(&self, key: &str) -> Self {
        self.concat(Segment::Key(key.to_string()))
    }

    /// The parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Whether `self` is `other` or a descendant of it.
    pub fn starts_with(&self, other: &FieldPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

/// Resolve the path of one table cell.
///
/// The cell lives at `base.<row>` when the row value itself is the cell
/// (scalar item schemas) and at `base.<row>.<key>` for property columns.
pub fn resolve_cell_path(base: &FieldPath, row: usize, key: Option<&str>) -> FieldPath {
    let row_path = base.index(row);
    match key {
        Some(key) => row_path.key(key),
        None => row_path,
    }
}
