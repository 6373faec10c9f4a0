//! Name colors after a curated table and group them into styles.
//!
//! - [`ColorTable`] is an ordered list of named reference colors.  Its
//!   [`classify`][ColorTable::classify] method returns the name of the
//!   entry closest (in the RGB cube) to a given color.
//! - [`StyleGroups`] maps sets of color names to aesthetic categories
//!   such as "Coastal" or "Academia".
//! - [`ExtractedColors`] ties both together for the four colors
//!   (background, primary, secondary, detail) extracted from a picture.
//!
//! The compiled-in data is available through [`ColorTable::standard`]
//! and [`StyleGroups::standard`], or through the shorthands
//! [`classify`] and [`resolve_groups`].
//!
//! ```
//! use rgb::RGB;
//! let name = chroma_names::classify(&RGB { r: 0.02, g: 0.12, b: 0.4 });
//! assert_eq!(name, "Navy");
//! let styles = chroma_names::resolve_groups([name, "Ivory"]);
//! assert!(styles.contains("Academia"));
//! ```

use std::borrow::Cow;
use lazy_static::lazy_static;
use log::{debug, trace};
use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};
use thiserror::Error;

mod names;
pub use names::ty::{ColorEntry, StyleGroup};
mod style;
pub use style::{StyleGroups, resolve_groups};
mod extracted;
pub use extracted::{Role, ExtractedColors, PaletteDescription};

/// Name returned for colors which do not have red, green and blue
/// components.
pub const UNKNOWN: &str = "Unknown";

/// Errors raised when building a custom [`ColorTable`] or
/// [`StyleGroups`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("a color table must contain at least one entry")]
    Empty,
    #[error("entry #{index} “{name}” has a component outside [0, 1]: \
             ({r}, {g}, {b})")]
    OutOfRange { index: usize, name: String, r: f64, g: f64, b: f64 },
    #[error("style label “{0}” is defined more than once")]
    DuplicateLabel(String),
}

/// Colors which can be given to the classifier.
pub trait QueryColor {
    /// Return the red, green and blue components of the color, scaled
    /// to \[0, 1\], or `None` if the color does not have three finite
    /// components.  Alpha, if any, is dropped.
    fn rgb_components(&self) -> Option<RGB<f64>>;
}

fn finite(c: RGB<f64>) -> Option<RGB<f64>> {
    if c.r.is_finite() && c.g.is_finite() && c.b.is_finite() { Some(c) }
    else { None }
}

impl QueryColor for RGB<f64> {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> { finite(*self) }
}

impl QueryColor for RGBA<f64> {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        finite(RGB { r: self.r, g: self.g, b: self.b })
    }
}

impl QueryColor for RGB8 {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        Some(RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
                   b: self.b as f64 / 255. })
    }
}

impl QueryColor for RGBA8 {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        Some(RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
                   b: self.b as f64 / 255. })
    }
}

impl QueryColor for RGB16 {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        Some(RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
                   b: self.b as f64 / 65535. })
    }
}

impl QueryColor for RGBA16 {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        Some(RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
                   b: self.b as f64 / 65535. })
    }
}

impl QueryColor for (f64, f64, f64) {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        finite(RGB { r: self.0, g: self.1, b: self.2 })
    }
}

/// The first three components are red, green and blue.  Slices with
/// fewer components are not colors.
impl QueryColor for [f64] {
    fn rgb_components(&self) -> Option<RGB<f64>> {
        match self {
            [r, g, b, ..] => finite(RGB { r: *r, g: *g, b: *b }),
            _ => None,
        }
    }
}

impl<const N: usize> QueryColor for [f64; N] {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        self.as_slice().rgb_components()
    }
}

impl QueryColor for Vec<f64> {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        self.as_slice().rgb_components()
    }
}

impl<C: QueryColor> QueryColor for Option<C> {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        self.as_ref().and_then(|c| c.rgb_components())
    }
}

impl<C: QueryColor + ?Sized> QueryColor for &C {
    #[inline]
    fn rgb_components(&self) -> Option<RGB<f64>> {
        C::rgb_components(*self)
    }
}

/// Euclidean distance between `a` and `b` in the RGB cube.
#[inline]
pub fn distance(a: RGB<f64>, b: RGB<f64>) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// The closest entry of a [`ColorTable`] to a query color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'a> {
    /// The winning entry.
    pub entry: &'a ColorEntry,
    /// Position of `entry` in the table.
    pub index: usize,
    /// Distance between the query and `entry`.
    pub distance: f64,
}

impl<'a> Match<'a> {
    #[inline]
    pub fn name(&self) -> &'a str { self.entry.name() }
}

/// An ordered, non-empty and immutable list of reference colors.
///
/// Entries are kept in the order they were given.  This order only
/// matters to break ties: when several entries are at the same
/// distance of a query, the first one wins.
#[derive(Clone, Debug)]
pub struct ColorTable {
    entries: Cow<'static, [ColorEntry]>, // Invariant: non-empty
}

lazy_static! {
    static ref STANDARD_TABLE: ColorTable =
        ColorTable { entries: Cow::Borrowed(names::COLORS.as_slice()) };
}

impl ColorTable {
    /// The curated table shipped with the crate.  It is built on first
    /// use and never modified afterwards.
    pub fn standard() -> &'static ColorTable { &STANDARD_TABLE }

    /// Build a table from `entries`, checking that there is at least
    /// one entry and that all components lie in \[0, 1\].
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_names::{ColorTable, ColorEntry};
    /// let table = ColorTable::new(vec![
    ///     ColorEntry::new("Ink", 0.1, 0.1, 0.2),
    ///     ColorEntry::new("Paper", 0.95, 0.95, 0.9),
    /// ])?;
    /// assert_eq!(table.classify(&[0.8, 0.8, 0.8]), "Paper");
    /// # Ok::<(), chroma_names::TableError>(())
    /// ```
    pub fn new(entries: Vec<ColorEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty)
        }
        let in_range = |x: f64| (0. ..= 1.).contains(&x);
        for (index, e) in entries.iter().enumerate() {
            let RGB { r, g, b } = e.rgb;
            if !(in_range(r) && in_range(g) && in_range(b)) {
                return Err(TableError::OutOfRange {
                    index, name: e.name.to_string(), r, g, b })
            }
        }
        debug!("built a color table with {} entries", entries.len());
        Ok(ColorTable { entries: Cow::Owned(entries) })
    }

    /// The entries of the table, in order.
    #[inline]
    pub fn entries(&self) -> &[ColorEntry] { &self.entries }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }

    /// Number of entries (not of distinct names).  Always ≥ 1.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Always `false`; provided for symmetry with [`len`][Self::len].
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// The distinct names of the table in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for e in self.entries.iter() {
            if !names.contains(&e.name()) {
                names.push(e.name())
            }
        }
        names
    }

    /// Says whether at least one entry is named `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name() == name)
    }

    /// Return the entry closest to `color`, or `None` if `color` has no
    /// usable RGB components.  On ties, the entry coming first in the
    /// table wins.
    pub fn nearest<C>(&self, color: &C) -> Option<Match<'_>>
    where C: QueryColor + ?Sized {
        let c = color.rgb_components()?;
        let mut best: Option<Match<'_>> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let d = distance(c, entry.rgb);
            // Strict comparison: the first of equally distant entries wins.
            if best.map_or(true, |m| d < m.distance) {
                best = Some(Match { entry, index, distance: d });
            }
        }
        best
    }

    /// Return the name of the entry closest to `color`, or [`UNKNOWN`]
    /// if `color` has no usable RGB components.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_names::{ColorTable, UNKNOWN};
    /// let table = ColorTable::standard();
    /// assert_eq!(table.classify(&[0.5, 0.5, 0.5]), "Medium Gray");
    /// assert_eq!(table.classify(&[0.5, 0.5][..]), UNKNOWN);
    /// ```
    pub fn classify<C>(&self, color: &C) -> &str
    where C: QueryColor + ?Sized {
        match self.nearest(color) {
            Some(m) => {
                trace!("color {:?} is “{}” (entry #{}, distance {:.4})",
                       color.rgb_components(), m.name(), m.index, m.distance);
                m.name()
            }
            None => {
                debug!("query color has no RGB components, naming it “{}”",
                       UNKNOWN);
                UNKNOWN
            }
        }
    }
}

impl Default for ColorTable {
    fn default() -> Self { ColorTable::standard().clone() }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Name `color` with the [standard table][ColorTable::standard].
#[inline]
pub fn classify<C>(color: &C) -> &'static str
where C: QueryColor + ?Sized {
    ColorTable::standard().classify(color)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&'static str, f64, f64, f64)]) -> ColorTable {
        ColorTable::new(entries.iter()
                        .map(|&(n, r, g, b)| ColorEntry::new(n, r, g, b))
                        .collect())
            .unwrap()
    }

    #[test]
    fn standard_table_invariants() {
        let t = ColorTable::standard();
        assert!(!t.is_empty());
        for e in t {
            for x in [e.red(), e.green(), e.blue()] {
                assert!((0. ..= 1.).contains(&x), "{:?}", e);
            }
            assert!(!e.name().is_empty());
        }
        // The standard data passes the checks of custom tables.
        assert!(ColorTable::new(t.entries().to_vec()).is_ok());
    }

    #[test]
    fn standard_table_has_repeated_names() {
        let t = ColorTable::standard();
        assert!(t.names().len() < t.len());
        assert_eq!(t.iter().filter(|e| e.name() == "Navy").count(), 3);
        assert_eq!(t.names()[0], "Bright Red");
        assert!(t.contains_name("Ivory"));
        assert!(!t.contains_name(UNKNOWN));
    }

    #[test]
    fn pure_red() {
        let m = ColorTable::standard().nearest(&[1., 0., 0.]).unwrap();
        assert_eq!(m.name(), "Bright Red");
        assert_eq!(m.distance, 0.);
        assert_eq!(classify(&RGB8::new(255, 0, 0)), "Bright Red");
    }

    #[test]
    fn mid_gray() {
        let m = ColorTable::standard().nearest(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(m.name(), "Medium Gray");
        assert!((m.distance - 0.11 * 3f64.sqrt()).abs() < 1e-12);
        let t = table(&[("Dark Gray", 0.38, 0.38, 0.38),
                        ("Medium Gray", 0.61, 0.61, 0.61)]);
        assert_eq!(t.classify(&[0.5, 0.5, 0.5]), "Medium Gray");
    }

    #[test]
    fn malformed_queries() {
        let t = ColorTable::standard();
        assert_eq!(t.classify(&[0.5, 0.5][..]), UNKNOWN);
        assert_eq!(t.classify(&Vec::<f64>::new()), UNKNOWN);
        assert_eq!(t.classify(&None::<RGB<f64>>), UNKNOWN);
        assert_eq!(t.classify(&[f64::NAN, 0., 0.]), UNKNOWN);
        assert_eq!(t.classify(&(0., f64::INFINITY, 0.)), UNKNOWN);
        assert!(t.nearest(&[0.1][..]).is_none());
    }

    #[test]
    fn alpha_is_ignored() {
        let t = ColorTable::standard();
        let opaque = RGBA { r: 0.3, g: 0.1, b: 0.4, a: 1. };
        let clear = RGBA { r: 0.3, g: 0.1, b: 0.4, a: 0. };
        assert_eq!(t.classify(&opaque), t.classify(&clear));
        assert_eq!(t.classify(&[0.3, 0.1, 0.4, 0.]), "Deep Purple");
    }

    #[test]
    fn out_of_range_queries_are_accepted() {
        let t = ColorTable::standard();
        assert_eq!(t.classify(&[1.5, -0.2, -0.1]), "Bright Red");
        assert_eq!(t.classify(&[-1., -1., -1.]), "Black");
    }

    #[test]
    fn deterministic() {
        let t = ColorTable::standard();
        for e in t {
            let q = [e.red() * 0.9 + 0.03, e.green() * 0.8, e.blue() + 0.01];
            assert_eq!(t.classify(&q), t.classify(&q));
        }
    }

    #[test]
    fn result_is_a_table_name() {
        let t = ColorTable::standard();
        let n = 8;
        for i in 0 ..= n {
            for j in 0 ..= n {
                for k in 0 ..= n {
                    let q = [i as f64 / n as f64, j as f64 / n as f64,
                             k as f64 / n as f64];
                    assert!(t.contains_name(t.classify(&q)), "{:?}", q);
                }
            }
        }
    }

    #[test]
    fn exact_match_is_first_zero_distance_entry() {
        let t = ColorTable::standard();
        for e in t {
            let m = t.nearest(&e.rgb()).unwrap();
            assert_eq!(m.distance, 0.);
            let first = t.iter().position(|f| f.rgb() == e.rgb()).unwrap();
            assert_eq!(m.index, first);
        }
        // Entries sharing coordinates under different names.
        assert_eq!(t.classify(&[1., 0., 1.]), "Fuchsia");
        assert_eq!(t.classify(&[0., 1., 1.]), "Aqua");
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        // 0.25 and 0.75 are exact in f64, so both are exactly 0.25 away.
        let t = table(&[("Left", 0.25, 0.5, 0.5), ("Right", 0.75, 0.5, 0.5)]);
        let m = t.nearest(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!((m.name(), m.distance), ("Left", 0.25));
        let t = table(&[("Right", 0.75, 0.5, 0.5), ("Left", 0.25, 0.5, 0.5)]);
        assert_eq!(t.classify(&[0.5, 0.5, 0.5]), "Right");
        let t = table(&[("A", 0.4, 0.4, 0.4), ("B", 0.4, 0.4, 0.4)]);
        let m = t.nearest(&[0.9, 0.1, 0.3]).unwrap();
        assert_eq!((m.name(), m.index), ("A", 0));
    }

    #[test]
    fn moving_towards_the_winner_keeps_it() {
        let t = table(&[("Ink", 0.1, 0.1, 0.2), ("Paper", 0.95, 0.95, 0.9),
                        ("Leaf", 0.2, 0.6, 0.1)]);
        let q = RGB { r: 0.3, g: 0.35, b: 0.2 };
        let winner = t.nearest(&q).unwrap();
        let e = winner.entry.rgb();
        for i in 0 ..= 10 {
            let s = i as f64 / 10.;
            let p = RGB { r: e.r + s * (q.r - e.r), g: e.g + s * (q.g - e.g),
                          b: e.b + s * (q.b - e.b) };
            let m = t.nearest(&p).unwrap();
            assert_eq!(m.index, winner.index);
            assert!(m.distance <= winner.distance + 1e-12);
        }
    }

    #[test]
    fn moving_away_from_the_winner_keeps_it() {
        let t = table(&[("Near", 0.5, 0.5, 0.5), ("Far", 0., 0., 0.),
                        ("Other", 0., 1., 0.)]);
        let mut last = 0.;
        for i in 0 ..= 10 {
            let s = i as f64 * 0.05;
            let m = t.nearest(&[0.5 + s, 0.5, 0.5 + s]).unwrap();
            assert_eq!(m.name(), "Near");
            assert!(m.distance >= last, "{} < {}", m.distance, last);
            last = m.distance;
        }
        assert!(last > 0.7);
    }

    #[test]
    fn shared_between_threads() {
        let queries: Vec<[f64; 3]> = (0 .. 64)
            .map(|i| [(i % 4) as f64 / 3., (i / 4 % 4) as f64 / 3.,
                      (i / 16) as f64 / 3.])
            .collect();
        let run = || {
            let names: Vec<&'static str> =
                queries.iter().map(|q| classify(q)).collect();
            let styles = resolve_groups(names.iter().copied());
            (names, styles)
        };
        let expected = run();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0 .. 4).map(|_| s.spawn(run)).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn integer_encodings() {
        let t = ColorTable::standard();
        assert_eq!(t.classify(&RGBA8::new(0, 0, 0, 255)), "Black");
        assert_eq!(t.classify(&RGB16::new(65535, 65535, 65535)), "White");
        assert_eq!(t.classify(&RGBA16::new(0, 0, 32768, 0)), "Navy");
    }

    #[test]
    fn custom_table_errors() {
        assert_eq!(ColorTable::new(vec![]).unwrap_err(), TableError::Empty);
        let err = ColorTable::new(vec![ColorEntry::new("Ok", 0., 0., 0.),
                                       ColorEntry::new("Bad", 0., 1.2, 0.)])
            .unwrap_err();
        assert!(matches!(err, TableError::OutOfRange { index: 1, .. }));
        assert!(ColorTable::new(vec![ColorEntry::new("Nan", f64::NAN, 0., 0.)])
                .is_err());
    }

    #[test]
    fn default_is_standard() {
        let t = ColorTable::default();
        assert_eq!(t.entries(), ColorTable::standard().entries());
    }
}
