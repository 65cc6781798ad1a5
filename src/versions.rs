use crate::version::Version;
use serde::{Deserialize, Serialize};
use sorted_vec::SortedVec;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// An owned list of versions that knows how to order itself.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Versions(pub Vec<Version>);

impl Versions {
    pub fn new() -> Self {
        Versions(Vec::new())
    }

    /// Sorts in place, lowest version first.
    pub fn sort(&mut self) {
        debug!("Sorting {} versions", self.0.len());
        // Equal versions are indistinguishable, stability buys nothing
        self.0.sort_unstable();
    }

    pub fn ascending(&mut self) {
        self.sort();
    }

    /// Returns a sorted copy, leaving `self` untouched.
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn into_sorted_vec(self) -> SortedVec<Version> {
        SortedVec::from_unsorted(self.0)
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

/// Collects `versions` and returns them in ascending order.
pub fn sort<I>(versions: I) -> Versions
where
    I: IntoIterator<Item = Version>,
{
    let mut sorted: Versions = versions.into_iter().collect();
    sorted.sort();
    sorted
}

impl Deref for Versions {
    type Target = Vec<Version>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Versions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Version>> for Versions {
    fn from(versions: Vec<Version>) -> Self {
        Versions(versions)
    }
}

impl FromIterator<Version> for Versions {
    fn from_iter<T: IntoIterator<Item = Version>>(iter: T) -> Self {
        Versions(iter.into_iter().collect())
    }
}

impl IntoIterator for Versions {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Versions {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
