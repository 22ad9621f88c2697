//! Ticker ordering: concatenated shuffled passes with no two neighbours
//! sharing an id.

use rand::Rng;

use crate::{Impact, SelectError};

/// Passes concatenated when the caller has no preference.
pub const DEFAULT_PASS_COUNT: usize = 10;

/// Builds `pass_count` shuffled passes over `records`, back to back.
///
/// The result holds `pass_count * records.len()` entries. Adjacent entries
/// have distinct ids, within a pass and across pass boundaries, unless the
/// input is too small or too repetitive for a repair to exist.
pub fn build_endless_sequence<'a, R: Rng + ?Sized>(
    records: &'a [Impact],
    pass_count: usize,
    rng: &mut R,
) -> Result<Vec<&'a Impact>, SelectError> {
    let mut sequence = Vec::new();
    extend_endless_sequence(&mut sequence, records, pass_count, rng)?;
    Ok(sequence)
}

/// Appends `pass_count` passes to `sequence`, keeping its seam duplicate-free.
pub fn extend_endless_sequence<'a, R: Rng + ?Sized>(
    sequence: &mut Vec<&'a Impact>,
    records: &'a [Impact],
    pass_count: usize,
    rng: &mut R,
) -> Result<(), SelectError> {
    if records.is_empty() {
        return Err(SelectError::EmptyCollection);
    }

    sequence.reserve(records.len() * pass_count);
    for _ in 0..pass_count {
        let mut pass = shuffled_pass(records, rng);
        separate_from_previous(sequence.last().copied(), &mut pass);
        sequence.extend(pass);
    }
    Ok(())
}

/// One uniformly shuffled pass with adjacent duplicate ids repaired.
pub fn shuffled_pass<'a, R: Rng + ?Sized>(records: &'a [Impact], rng: &mut R) -> Vec<&'a Impact> {
    let mut pass: Vec<&Impact> = records.iter().collect();
    fisher_yates(&mut pass, rng);
    repair_adjacent_duplicates(&mut pass);
    pass
}

fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Swaps a later entry into every position that repeats its predecessor's id.
///
/// The replacement must differ from the predecessor and from the entry right
/// after the repeated position. When no such entry exists the repeat stays.
fn repair_adjacent_duplicates(pass: &mut [&Impact]) {
    for i in 1..pass.len() {
        let previous = pass[i - 1].id;
        if pass[i].id != previous {
            continue;
        }
        let following = pass.get(i + 1).map(|impact| impact.id);
        let replacement =
            (i + 1..pass.len()).find(|&j| pass[j].id != previous && Some(pass[j].id) != following);
        if let Some(j) = replacement {
            pass.swap(i, j);
        }
    }
}

fn separate_from_previous(last: Option<&Impact>, pass: &mut [&Impact]) {
    let (Some(last), Some(first)) = (last, pass.first()) else {
        return;
    };
    if first.id == last.id && pass.len() > 1 {
        pass.swap(0, 1);
    }
}
