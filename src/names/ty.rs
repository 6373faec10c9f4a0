use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
pub(crate) use rgb::RGB;

/// A named reference point of the RGB cube.
///
/// Several entries may carry the same name: together they approximate
/// the region of colors answering to that name.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorEntry {
    pub(crate) name: Cow<'static, str>,
    pub(crate) rgb: RGB<f64>, // components in [0, 1]
}

impl ColorEntry {
    /// Create an entry.  Components are expected in \[0, 1\]; this is
    /// checked by [`ColorTable::new`](crate::ColorTable::new).
    pub fn new(name: impl Into<Cow<'static, str>>,
               red: f64, green: f64, blue: f64) -> Self {
        ColorEntry { name: name.into(), rgb: RGB { r: red, g: green, b: blue } }
    }

    /// The name of the entry.
    #[inline]
    pub fn name(&self) -> &str { &self.name }

    /// The coordinates of the entry.
    #[inline]
    pub fn rgb(&self) -> RGB<f64> { self.rgb }

    #[inline]
    pub fn red(&self) -> f64 { self.rgb.r }

    #[inline]
    pub fn green(&self) -> f64 { self.rgb.g }

    #[inline]
    pub fn blue(&self) -> f64 { self.rgb.b }
}

/// An aesthetic category and the color names belonging to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleGroup {
    pub(crate) label: Cow<'static, str>,
    pub(crate) members: BTreeSet<Cow<'static, str>>,
}

impl StyleGroup {
    pub fn new<L, I, S>(label: L, members: I) -> Self
    where L: Into<Cow<'static, str>>,
          I: IntoIterator<Item = S>,
          S: Into<Cow<'static, str>> {
        StyleGroup { label: label.into(),
                     members: members.into_iter().map(Into::into).collect() }
    }

    /// The label of the category, e.g. "Coastal".
    #[inline]
    pub fn label(&self) -> &str { &self.label }

    /// The color names of the category, in alphabetical order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.as_ref())
    }

    /// Says whether `name` belongs to the category.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Says whether at least one of `names` belongs to the category.
    pub fn intersects(&self, names: &HashSet<&str>) -> bool {
        self.members.iter().any(|m| names.contains(m.as_ref()))
    }
}
