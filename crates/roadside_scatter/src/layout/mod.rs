//! Roadside object layouts built from sampled points and regular rows.
//!
//! A [`RoadsideLayout`] is an ordered list of [`RoadsideObject`]s positioned
//! in road coordinates (s along the reference line, t across it). Layouts do
//! not model the road itself; they only describe where decorative objects go.
use std::fmt;

pub mod rows;
pub mod trees;

pub use rows::{lamp_posts_both_sides, objects_along, RowSpec};
pub use trees::{scatter_trees, trees_from_points, Side};

/// Category of a roadside object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    Tree,
    LampPost,
    Residential,
    Commercial,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Tree => "tree",
            ObjectKind::LampPost => "lampPost",
            ObjectKind::Residential => "residential",
            ObjectKind::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single object placed relative to a road reference line.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadsideObject {
    /// Display name, e.g. "tree" or "UK house 1".
    pub name: String,
    pub kind: ObjectKind,
    /// Distance along the reference line.
    pub s: f64,
    /// Lateral offset; positive is left of the reference line.
    pub t: f64,
    /// Heading relative to the reference line in radians.
    pub heading: f64,
    /// Vertical offset from the road surface.
    pub z_offset: f64,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
}

impl RoadsideObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind, s: f64, t: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            s,
            t,
            heading: 0.0,
            z_offset: 0.0,
            height: None,
            width: None,
            length: None,
        }
    }

    pub fn tree(s: f64, t: f64, height: f64) -> Self {
        Self::new("tree", ObjectKind::Tree, s, t).with_height(height)
    }

    pub fn lamp_post(s: f64, t: f64, heading: f64) -> Self {
        Self::new("lamp post", ObjectKind::LampPost, s, t).with_heading(heading)
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_z_offset(mut self, z_offset: f64) -> Self {
        self.z_offset = z_offset;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets width and length of the object's footprint.
    pub fn with_footprint(mut self, width: f64, length: f64) -> Self {
        self.width = Some(width);
        self.length = Some(length);
        self
    }

    /// Copy of this object moved to `(s, t)`.
    pub fn placed_at(&self, s: f64, t: f64) -> Self {
        Self {
            s,
            t,
            ..self.clone()
        }
    }
}

/// Ordered collection of roadside objects for one road.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadsideLayout {
    objects: Vec<RoadsideObject>,
}

impl RoadsideLayout {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, object: RoadsideObject) {
        self.objects.push(object);
    }

    /// Builder-style variant of [`Extend::extend`].
    pub fn with_objects<I>(mut self, objects: I) -> Self
    where
        I: IntoIterator<Item = RoadsideObject>,
    {
        self.objects.extend(objects);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoadsideObject> {
        self.objects.iter()
    }

    pub fn as_slice(&self) -> &[RoadsideObject] {
        &self.objects
    }

    /// Number of objects of the given kind.
    pub fn count_of(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }

    /// Smallest and largest `(s, t)` over all objects, or `None` if empty.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.objects.first()?;
        let init = ((first.s, first.t), (first.s, first.t));
        Some(self.objects.iter().fold(init, |((min_s, min_t), (max_s, max_t)), o| {
            (
                (min_s.min(o.s), min_t.min(o.t)),
                (max_s.max(o.s), max_t.max(o.t)),
            )
        }))
    }
}

impl Extend<RoadsideObject> for RoadsideLayout {
    fn extend<I: IntoIterator<Item = RoadsideObject>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl FromIterator<RoadsideObject> for RoadsideLayout {
    fn from_iter<I: IntoIterator<Item = RoadsideObject>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RoadsideLayout {
    type Item = RoadsideObject;
    type IntoIter = std::vec::IntoIter<RoadsideObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoadsideLayout {
    type Item = &'a RoadsideObject;
    type IntoIter = std::slice::Iter<'a, RoadsideObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
