//! Insertion-ordered, duplicate-free marker collection

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Ordered set of subordination markers.
///
/// Keeps the order in which markers were first seen and silently rejects
/// duplicates. Marker lists are short, so membership is a linear scan over
/// inline storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet {
    markers: SmallVec<[String; 4]>,
}

impl MarkerSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding one marker
    pub fn single(marker: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(marker);
        set
    }

    /// Insert a marker; returns false if it was already present
    pub fn insert(&mut self, marker: impl Into<String>) -> bool {
        let marker = marker.into();
        if self.contains(&marker) {
            return false;
        }
        self.markers.push(marker);
        true
    }

    /// Membership test
    pub fn contains(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Append all markers of `other` that are not yet present
    pub fn union(mut self, other: &MarkerSet) -> Self {
        self.extend(other.iter().map(str::to_string));
        self
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True if no marker is present
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.iter().map(String::as_str)
    }

    /// Convert into a plain vector
    pub fn into_vec(self) -> Vec<String> {
        self.markers.into_vec()
    }
}

impl<S: Into<String>> Extend<S> for MarkerSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for marker in iter {
            self.insert(marker);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Serialize for MarkerSet {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.markers.iter())
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.markers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}
