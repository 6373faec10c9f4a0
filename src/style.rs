//! Aesthetic categories of color names.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use lazy_static::lazy_static;
use crate::{names, StyleGroup, TableError};

/// A list of [`StyleGroup`]s with distinct labels.
///
/// Membership is not exclusive: a color name may belong to several
/// groups, or to none.
#[derive(Clone, Debug)]
pub struct StyleGroups {
    groups: Cow<'static, [StyleGroup]>,
}

lazy_static! {
    static ref STANDARD_GROUPS: StyleGroups =
        StyleGroups { groups: Cow::Borrowed(names::STYLES.as_slice()) };
}

impl StyleGroups {
    /// The curated groups shipped with the crate, referring to the
    /// names of [`ColorTable::standard`](crate::ColorTable::standard).
    pub fn standard() -> &'static StyleGroups { &STANDARD_GROUPS }

    /// Build custom groups.  Fails if two groups share a label.
    pub fn new(groups: Vec<StyleGroup>) -> Result<Self, TableError> {
        let mut labels = HashSet::new();
        for g in &groups {
            if !labels.insert(g.label()) {
                return Err(TableError::DuplicateLabel(g.label().to_string()))
            }
        }
        Ok(StyleGroups { groups: Cow::Owned(groups) })
    }

    #[inline]
    pub fn groups(&self) -> &[StyleGroup] { &self.groups }

    #[inline]
    pub fn len(&self) -> usize { self.groups.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Return the labels of all groups containing at least one of
    /// `names`.  Repeated names have no effect.  The result is empty
    /// when no group matches.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_names::StyleGroups;
    /// let styles = StyleGroups::standard().resolve(["Navy", "Ivory"]);
    /// assert_eq!(styles.into_iter().collect::<Vec<_>>(),
    ///            ["Academia", "Professional"]);
    /// ```
    pub fn resolve<'n, I>(&self, names: I) -> BTreeSet<&str>
    where I: IntoIterator<Item = &'n str> {
        let names: HashSet<&str> = names.into_iter().collect();
        self.groups.iter()
            .filter(|g| g.intersects(&names))
            .map(|g| g.label())
            .collect()
    }

    /// Labels of the groups `name` belongs to, in group order.
    pub fn groups_of<'a>(&'a self, name: &'a str)
                         -> impl Iterator<Item = &'a str> + 'a {
        self.groups.iter()
            .filter(move |g| g.contains(name))
            .map(|g| g.label())
    }

    /// Join `labels` with `sep`, in the (alphabetical) order of the set.
    pub fn join(labels: &BTreeSet<&str>, sep: &str) -> String {
        labels.iter().copied().collect::<Vec<_>>().join(sep)
    }
}

impl Default for StyleGroups {
    fn default() -> Self { StyleGroups::standard().clone() }
}

/// Resolve `names` with the [standard groups][StyleGroups::standard].
pub fn resolve_groups<'n, I>(names: I) -> BTreeSet<&'static str>
where I: IntoIterator<Item = &'n str> {
    StyleGroups::standard().resolve(names)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorTable;

    #[test]
    fn members_are_table_names() {
        let table = ColorTable::standard();
        for g in StyleGroups::standard().groups() {
            for m in g.members() {
                assert!(table.contains_name(m), "{}: {}", g.label(), m);
            }
        }
    }

    #[test]
    fn labels_are_distinct() {
        let groups = StyleGroups::standard();
        assert!(StyleGroups::new(groups.groups().to_vec()).is_ok());
        assert!(!groups.is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(resolve_groups(std::iter::empty()).is_empty());
    }

    #[test]
    fn name_without_group() {
        assert!(resolve_groups(["Bright Red"]).is_empty());
        assert!(resolve_groups(["Not a color"]).is_empty());
        assert!(resolve_groups([crate::UNKNOWN]).is_empty());
    }

    #[test]
    fn name_in_several_groups() {
        let groups = StyleGroups::standard();
        let expected: BTreeSet<&str> = groups.groups_of("Hot Pink").collect();
        assert_eq!(expected.len(), 3);
        assert_eq!(groups.resolve(["Hot Pink"]), expected);
        assert_eq!(StyleGroups::join(&expected, ", "), "Emo, Tropical, Y2K");
    }

    #[test]
    fn academia_and_professional() {
        let styles = resolve_groups(["Navy", "Ivory"]);
        assert_eq!(StyleGroups::join(&styles, " & "), "Academia & Professional");
        // Duplicates do not matter.
        assert_eq!(resolve_groups(["Navy", "Navy", "Ivory", "Navy"]), styles);
    }

    #[test]
    fn union_of_groups() {
        let styles = resolve_groups(["Sand", "Black"]);
        let expected: BTreeSet<&str> =
            ["Boho", "Coastal", "Emo", "Gothic", "Minimalist"].into();
        assert_eq!(styles, expected);
    }

    #[test]
    fn custom_groups() {
        let groups = StyleGroups::new(vec![
            StyleGroup::new("Night", ["Black", "Navy"]),
            StyleGroup::new("Day", ["White", "Sky Blue"]),
            StyleGroup::new("Sea", ["Navy", "Sky Blue"]),
        ]).unwrap();
        assert_eq!(groups.resolve(["Navy"]).into_iter().collect::<Vec<_>>(),
                   ["Night", "Sea"]);
        assert_eq!(groups.groups_of("Sky Blue").collect::<Vec<_>>(),
                   ["Day", "Sea"]);
        assert!(groups.resolve(["Red"]).is_empty());
    }

    #[test]
    fn duplicate_labels() {
        let err = StyleGroups::new(vec![StyleGroup::new("Sea", ["Navy"]),
                                        StyleGroup::new("Sea", ["Teal"])])
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateLabel("Sea".to_string()));
    }
}
