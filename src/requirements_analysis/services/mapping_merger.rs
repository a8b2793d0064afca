use crate::requirements_analysis::domain::DependencyMapping;

/// MappingMerger service for combining mappings from several sources
///
/// The union is stable: keys and packages from the left input come first,
/// then whatever only the right input contributes.
pub struct MappingMerger;

impl MappingMerger {
    /// Merges two mappings without touching either input
    pub fn merge(a: &DependencyMapping, b: &DependencyMapping) -> DependencyMapping {
        let mut merged = a.clone();
        Self::merge_into(&mut merged, b);
        merged
    }

    /// Folds any number of mappings left to right, starting from empty
    pub fn merge_all<'a, I>(mappings: I) -> DependencyMapping
    where
        I: IntoIterator<Item = &'a DependencyMapping>,
    {
        mappings
            .into_iter()
            .fold(DependencyMapping::new(), |mut acc, next| {
                Self::merge_into(&mut acc, next);
                acc
            })
    }

    fn merge_into(target: &mut DependencyMapping, other: &DependencyMapping) {
        for (dependent, packages) in other.iter() {
            target.ensure_key(dependent);
            for package in packages {
                target.insert(dependent, package);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mapping(pairs: Vec<(&str, Vec<&str>)>) -> DependencyMapping {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_merge_non_overlapping_keys() {
        let a = mapping(vec![("flask-migrate", vec!["alembic"])]);
        let b = mapping(vec![("paramiko", vec!["bcrypt"])]);

        let merged = MappingMerger::merge(&a, &b);

        let expected = mapping(vec![
            ("flask-migrate", vec!["alembic"]),
            ("paramiko", vec!["bcrypt"]),
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_overlapping_keys_with_unique_packages() {
        let a = mapping(vec![("flask-migrate", vec!["alembic"])]);
        let b = mapping(vec![
            ("flask-migrate", vec!["async-timeout"]),
            ("paramiko", vec!["bcrypt"]),
        ]);

        let merged = MappingMerger::merge(&a, &b);

        let expected = mapping(vec![
            ("flask-migrate", vec!["alembic", "async-timeout"]),
            ("paramiko", vec!["bcrypt"]),
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_overlapping_keys_with_duplicate_packages() {
        let a = mapping(vec![("flask-migrate", vec!["alembic", "async-timeout"])]);
        let b = mapping(vec![("flask-migrate", vec!["alembic"]), ("paramiko", vec!["bcrypt"])]);

        let merged = MappingMerger::merge(&a, &b);

        let expected = mapping(vec![
            ("flask-migrate", vec!["alembic", "async-timeout"]),
            ("paramiko", vec!["bcrypt"]),
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_with_empty_mappings() {
        let empty = DependencyMapping::new();
        let b = mapping(vec![("paramiko", vec!["bcrypt"])]);

        assert_eq!(MappingMerger::merge(&empty, &b), b);
        assert_eq!(MappingMerger::merge(&b, &empty), b);
        assert!(MappingMerger::merge(&empty, &empty).is_empty());
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let a = mapping(vec![("flask-migrate", vec!["alembic"])]);
        let b = mapping(vec![("flask-migrate", vec!["async-timeout"])]);
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = MappingMerger::merge(&a, &b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_merge_is_commutative_on_membership() {
        let a = mapping(vec![("x", vec!["p", "q"]), ("y", vec!["r"])]);
        let b = mapping(vec![("x", vec!["q", "s"]), ("z", vec!["t"])]);

        let ab = MappingMerger::merge(&a, &b);
        let ba = MappingMerger::merge(&b, &a);

        let ab_keys: HashSet<&str> = ab.keys().collect();
        let ba_keys: HashSet<&str> = ba.keys().collect();
        assert_eq!(ab_keys, ba_keys);

        for key in ab_keys {
            let left: HashSet<&String> = ab.get(key).unwrap().iter().collect();
            let right: HashSet<&String> = ba.get(key).unwrap().iter().collect();
            assert_eq!(left, right, "membership differs for {}", key);
        }
        assert_eq!(ab.get("x").unwrap(), &["p", "q", "s"]);
        assert_eq!(ba.get("x").unwrap(), &["q", "s", "p"]);
    }

    #[test]
    fn test_merge_is_associative_on_membership() {
        let a = mapping(vec![("x", vec!["p"])]);
        let b = mapping(vec![("x", vec!["q"]), ("y", vec!["r"])]);
        let c = mapping(vec![("x", vec!["p", "s"])]);

        let left = MappingMerger::merge(&MappingMerger::merge(&a, &b), &c);
        let right = MappingMerger::merge(&a, &MappingMerger::merge(&b, &c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_merge_all_folds_in_order() {
        let a = mapping(vec![("x", vec!["p"])]);
        let b = mapping(vec![("y", vec!["q"])]);
        let c = mapping(vec![("x", vec!["p", "r"])]);

        let merged = MappingMerger::merge_all([&a, &b, &c]);

        let keys: Vec<&str> = merged.keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(merged.get("x").unwrap(), &["p", "r"]);
        assert_eq!(merged.pair_count(), 3);
    }

    #[test]
    fn test_merge_all_of_nothing_is_empty() {
        let merged = MappingMerger::merge_all(std::iter::empty());
        assert!(merged.is_empty());
    }
}
