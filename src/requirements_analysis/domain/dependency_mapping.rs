use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Reverse dependency mapping: dependent package -> packages it pulled in.
///
/// Keys keep insertion order, and so does each package list. A package
/// name never appears twice under the same dependent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMapping {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl DependencyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `package` under `dependent`, creating the key if needed.
    ///
    /// Returns `false` when the pair was already present.
    pub fn insert(&mut self, dependent: &str, package: &str) -> bool {
        let packages = self.packages_mut(dependent);
        if packages.iter().any(|p| p == package) {
            return false;
        }
        packages.push(package.to_string());
        true
    }

    /// Ensures `dependent` exists as a key, even with no packages.
    pub fn ensure_key(&mut self, dependent: &str) {
        self.packages_mut(dependent);
    }

    pub fn get(&self, dependent: &str) -> Option<&[String]> {
        self.index
            .get(dependent)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains_key(&self, dependent: &str) -> bool {
        self.index.contains_key(dependent)
    }

    /// Iterates `(dependent, packages)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (dependent, package) pairs.
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    /// Keeps only the entries for which `keep(dependent, package)` holds.
    ///
    /// Dependents left without packages are removed.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        for (dependent, packages) in self.entries.iter_mut() {
            let dependent = dependent.as_str();
            packages.retain(|p| keep(dependent, p));
        }
        self.entries.retain(|(_, packages)| !packages.is_empty());
        self.reindex();
    }

    fn packages_mut(&mut self, dependent: &str) -> &mut Vec<String> {
        let existing = self.index.get(dependent).copied();
        let i = match existing {
            Some(i) => i,
            None => {
                self.entries.push((dependent.to_string(), Vec::new()));
                let i = self.entries.len() - 1;
                self.index.insert(dependent.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
    }
}

impl<K, V, P> FromIterator<(K, V)> for DependencyMapping
where
    K: AsRef<str>,
    V: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = DependencyMapping::new();
        for (dependent, packages) in iter {
            mapping.ensure_key(dependent.as_ref());
            for package in packages {
                mapping.insert(dependent.as_ref(), package.as_ref());
            }
        }
        mapping
    }
}

impl Serialize for DependencyMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (dependent, packages) in &self.entries {
            map.serialize_entry(dependent, packages)?;
        }
        map.end()
    }
}
