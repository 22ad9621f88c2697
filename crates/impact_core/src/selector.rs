//! Next/previous selection policy for the carousel.
//!
//! Sequential selection wraps at both ends. Random selection draws uniformly
//! from a candidate pool built by a three-tier relaxation:
//!
//! 1. impacts sharing neither `text` nor `entity` with the current one,
//! 2. otherwise impacts with a different `id`,
//! 3. otherwise the whole list.
//!
//! The tier order decides which impacts are eligible on degenerate data (for
//! example a list dominated by one entity) and must not be reordered.

use rand::Rng;

use crate::{Impact, ImpactId, SelectError, SelectionMode};

/// Returns the impact after `current_index` and its index, wrapping to 0.
pub fn select_next_sequential(
    records: &[Impact],
    current_index: usize,
) -> Result<(&Impact, usize), SelectError> {
    let len = non_empty_len(records)?;
    let index = (current_index % len + 1) % len;
    Ok((&records[index], index))
}

/// Returns the impact before `current_index` and its index, wrapping to the end.
pub fn select_previous_sequential(
    records: &[Impact],
    current_index: usize,
) -> Result<(&Impact, usize), SelectError> {
    let len = non_empty_len(records)?;
    let index = (current_index % len + len - 1) % len;
    Ok((&records[index], index))
}

/// Draws a random impact that visibly differs from `exclude` where possible.
pub fn select_random<'a, R: Rng + ?Sized>(
    records: &'a [Impact],
    exclude: Option<&Impact>,
    rng: &mut R,
) -> Result<&'a Impact, SelectError> {
    non_empty_len(records)?;
    let pool = candidate_pool(records, exclude);
    let index = rng.random_range(0..pool.len());
    Ok(pool[index])
}

/// Eligible impacts for a random draw; never empty for a non-empty list.
pub fn candidate_pool<'a>(records: &'a [Impact], exclude: Option<&Impact>) -> Vec<&'a Impact> {
    let Some(current) = exclude else {
        return records.iter().collect();
    };

    let distinct: Vec<&Impact> = records
        .iter()
        .filter(|impact| impact.text != current.text && impact.entity != current.entity)
        .collect();
    if !distinct.is_empty() {
        return distinct;
    }

    let other_ids: Vec<&Impact> = records
        .iter()
        .filter(|impact| impact.id != current.id)
        .collect();
    if !other_ids.is_empty() {
        return other_ids;
    }

    records.iter().collect()
}

/// Position of the impact with `id`, by linear search.
pub fn find_index_by_id(records: &[Impact], id: ImpactId) -> Result<usize, SelectError> {
    non_empty_len(records)?;
    records
        .iter()
        .position(|impact| impact.id == id)
        .ok_or(SelectError::InvalidReference { id })
}

/// Index of the first impact shown after a load.
///
/// Sequential mode starts at `start_id` when given, otherwise at 0. Random
/// mode starts at a uniformly random position and ignores `start_id`.
pub fn initial_index<R: Rng + ?Sized>(
    records: &[Impact],
    mode: SelectionMode,
    start_id: Option<ImpactId>,
    rng: &mut R,
) -> Result<usize, SelectError> {
    let len = non_empty_len(records)?;
    match (mode, start_id) {
        (SelectionMode::Sequential, Some(id)) => find_index_by_id(records, id),
        (SelectionMode::Sequential, None) => Ok(0),
        (SelectionMode::Random, _) => Ok(rng.random_range(0..len)),
    }
}

fn non_empty_len(records: &[Impact]) -> Result<usize, SelectError> {
    match records.len() {
        0 => Err(SelectError::EmptyCollection),
        len => Ok(len),
    }
}
