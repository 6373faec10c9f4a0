//! The colors extracted from a picture and their description.

use std::collections::BTreeSet;
use std::fmt;
use log::debug;
use rgb::RGB;
use crate::{ColorTable, QueryColor, StyleGroups};

/// The part of a picture an extracted color comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    Primary,
    Secondary,
    Detail,
}

impl Role {
    /// All roles, in presentation order.
    pub const ALL: [Role; 4] =
        [Role::Background, Role::Primary, Role::Secondary, Role::Detail];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Background => "Background",
            Role::Primary => "Primary",
            Role::Secondary => "Secondary",
            Role::Detail => "Detail",
        };
        f.write_str(s)
    }
}

const BLACK: RGB<f64> = RGB { r: 0., g: 0., b: 0. };

/// Up to four colors produced by a color extractor.  An extractor may
/// fail to produce some of them; those are named as black.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedColors<C> {
    pub background: Option<C>,
    pub primary: Option<C>,
    pub secondary: Option<C>,
    pub detail: Option<C>,
}

impl<C> Default for ExtractedColors<C> {
    fn default() -> Self {
        ExtractedColors { background: None, primary: None,
                          secondary: None, detail: None }
    }
}

impl<C> ExtractedColors<C> {
    pub fn new(background: Option<C>, primary: Option<C>,
               secondary: Option<C>, detail: Option<C>) -> Self {
        ExtractedColors { background, primary, secondary, detail }
    }

    /// The color extracted for `role`, if any.
    pub fn get(&self, role: Role) -> Option<&C> {
        match role {
            Role::Background => self.background.as_ref(),
            Role::Primary => self.primary.as_ref(),
            Role::Secondary => self.secondary.as_ref(),
            Role::Detail => self.detail.as_ref(),
        }
    }
}

impl<C: QueryColor> ExtractedColors<C> {
    /// Name the color of `role` with `table`.  A missing color is
    /// replaced by black; a color without RGB components is
    /// [`UNKNOWN`](crate::UNKNOWN).
    pub fn name<'t>(&self, role: Role, table: &'t ColorTable) -> &'t str {
        match self.get(role) {
            Some(c) => table.classify(c),
            None => {
                debug!("no {} color extracted, using black", role);
                table.classify(&BLACK)
            }
        }
    }

    /// Name the four colors with `table` and find their styles in
    /// `groups`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chroma_names::{ColorTable, ExtractedColors, StyleGroups};
    /// let colors = ExtractedColors::new(
    ///     Some(RGB8::new(250, 248, 240)), Some(RGB8::new(0, 33, 97)),
    ///     Some(RGB8::new(114, 47, 55)), None);
    /// let d = colors.describe(ColorTable::standard(),
    ///                         StyleGroups::standard());
    /// assert_eq!(d.names(), ["Off White", "Navy", "Wine", "Black"]);
    /// assert!(d.styles.contains("Gothic"));
    /// ```
    pub fn describe<'t>(&self, table: &'t ColorTable,
                        groups: &'t StyleGroups) -> PaletteDescription<'t> {
        let background = self.name(Role::Background, table);
        let primary = self.name(Role::Primary, table);
        let secondary = self.name(Role::Secondary, table);
        let detail = self.name(Role::Detail, table);
        let styles = groups.resolve([background, primary, secondary, detail]);
        PaletteDescription { background, primary, secondary, detail, styles }
    }
}

/// Names and styles of an [`ExtractedColors`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteDescription<'t> {
    pub background: &'t str,
    pub primary: &'t str,
    pub secondary: &'t str,
    pub detail: &'t str,
    /// Labels of the matching style groups, alphabetically sorted.
    pub styles: BTreeSet<&'t str>,
}

impl<'t> PaletteDescription<'t> {
    pub fn get(&self, role: Role) -> &'t str {
        match role {
            Role::Background => self.background,
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Detail => self.detail,
        }
    }

    /// The names of the colors, in the order of [`Role::ALL`].
    pub fn names(&self) -> [&'t str; 4] {
        Role::ALL.map(|r| self.get(r))
    }
}

impl fmt::Display for PaletteDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for role in Role::ALL {
            writeln!(f, "{}: {}", role, self.get(role))?;
        }
        if self.styles.is_empty() {
            write!(f, "Styles: none")
        } else {
            write!(f, "Styles: {}", StyleGroups::join(&self.styles, ", "))
        }
    }
}
