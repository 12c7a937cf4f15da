//! Hash join baseline.
//!
//! Builds one hash set per relation except the last, then probes the last
//! relation against every set. Input order does not matter, so this is the
//! reference the leapfrog join is checked against.

use alloc::vec::Vec;
use hashbrown::HashSet;
use leapjoin_core::Key;

/// Returns the keys present in every relation, in the order of the last one.
///
/// # Panics
///
/// Panics if fewer than two relations are given.
pub fn hash_join<T: AsRef<[Key]>>(relations: &[T]) -> Vec<Key> {
    assert!(
        relations.len() >= 2,
        "hash join needs at least 2 relations, got {}",
        relations.len()
    );

    let (build, probe) = relations.split_at(relations.len() - 1);
    let probe = probe[0].as_ref();

    // Build phase
    let tables: Vec<HashSet<Key>> = build
        .iter()
        .map(|rel| {
            let keys = rel.as_ref();
            let mut set = HashSet::with_capacity(keys.len());
            set.extend(keys.iter().copied());
            set
        })
        .collect();

    // Probe phase
    let result: Vec<Key> = probe
        .iter()
        .copied()
        .filter(|key| tables.iter().all(|set| set.contains(key)))
        .collect();

    tracing::debug!(relations = relations.len(), hits = result.len(), "hash join complete");
    result
}

/// Counts the keys present in every relation.
pub fn hash_join_count<T: AsRef<[Key]>>(relations: &[T]) -> usize {
    hash_join(relations).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_hash_join_two() {
        let relations: [Vec<Key>; 2] = [vec![0, 2, 4, 6], vec![6, 3, 0]];
        let result = hash_join(&relations);
        // Probe order follows the last relation
        assert_eq!(result, vec![6, 0]);
    }

    #[test]
    fn test_hash_join_three() {
        let relations: [&[Key]; 3] = [&[0, 1, 2, 3], &[1, 2, 3, 4], &[2, 3, 4, 5]];
        assert_eq!(hash_join_count(&relations), 2);
    }

    #[test]
    fn test_hash_join_disjoint() {
        let relations: [&[Key]; 2] = [&[0, 2, 4, 6], &[1, 3, 5, 7]];
        assert_eq!(hash_join_count(&relations), 0);
    }

    #[test]
    fn test_hash_join_empty_relation() {
        let relations: [&[Key]; 2] = [&[1, 2, 3], &[]];
        assert_eq!(hash_join_count(&relations), 0);
        let relations: [&[Key]; 2] = [&[], &[1, 2, 3]];
        assert_eq!(hash_join_count(&relations), 0);
    }

    #[test]
    fn test_hash_join_four_way() {
        let relations: [Vec<Key>; 4] = [
            vec![1, 2, 3, 4, 5],
            vec![2, 3, 4, 5],
            vec![3, 4, 5],
            vec![5, 4, 9],
        ];
        assert_eq!(hash_join(&relations), vec![5, 4]);
    }

    #[test]
    #[should_panic(expected = "at least 2 relations")]
    fn test_hash_join_single_relation_panics() {
        hash_join::<Vec<Key>>(&[vec![1, 2, 3]]);
    }
}
