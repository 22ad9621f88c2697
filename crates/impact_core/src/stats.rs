use std::collections::BTreeSet;

use crate::{Impact, ImpactId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImpactStats {
    pub total: usize,
    pub unique_entities: usize,
    /// Sorted, without duplicates.
    pub entities: Vec<String>,
}

pub fn impact_stats(records: &[Impact]) -> ImpactStats {
    let entities: BTreeSet<&str> = records
        .iter()
        .map(|impact| impact.entity.as_str())
        .collect();
    ImpactStats {
        total: records.len(),
        unique_entities: entities.len(),
        entities: entities.into_iter().map(ToOwned::to_owned).collect(),
    }
}

pub fn filter_by_entity<'a>(records: &'a [Impact], entity: &str) -> Vec<&'a Impact> {
    records
        .iter()
        .filter(|impact| impact.entity == entity)
        .collect()
}

pub fn find_by_id(records: &[Impact], id: ImpactId) -> Option<&Impact> {
    records.iter().find(|impact| impact.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Impact> {
        vec![
            Impact::new(1, "WHO", "", "a"),
            Impact::new(2, "UNICEF", "", "b"),
            Impact::new(3, "WHO", "", "c"),
        ]
    }

    #[test]
    fn stats_count_sorted_unique_entities() {
        let stats = impact_stats(&sample());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.unique_entities, 2);
        assert_eq!(stats.entities, ["UNICEF", "WHO"]);
    }

    #[test]
    fn stats_of_empty_list_are_zero() {
        assert_eq!(impact_stats(&[]), ImpactStats::default());
    }

    #[test]
    fn entity_filter_and_id_lookup() {
        let records = sample();
        let who: Vec<_> = filter_by_entity(&records, "WHO")
            .iter()
            .map(|impact| impact.id)
            .collect();
        assert_eq!(who, vec![1, 3]);
        let found = find_by_id(&records, 2).map(|impact| impact.entity.as_str());
        assert_eq!(found, Some("UNICEF"));
        assert!(find_by_id(&records, 9).is_none());
    }
}
