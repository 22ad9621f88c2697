use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use impact_core::{build_endless_sequence, extend_endless_sequence, Impact, SelectError};
use impact_logging::impact_info;
use rand::Rng;

use super::ui::constants::TICKER_SEPARATOR;
use super::ui::render::render_ticker_entry;

/// Endless stream of impacts, refilled from the shuffler whenever it runs dry.
pub struct TickerFeed<'a, R> {
    records: &'a [Impact],
    passes: usize,
    rng: R,
    sequence: Vec<&'a Impact>,
    position: usize,
}

impl<'a, R: Rng> TickerFeed<'a, R> {
    pub fn new(records: &'a [Impact], passes: usize, mut rng: R) -> Result<Self, SelectError> {
        let passes = passes.max(1);
        let sequence = build_endless_sequence(records, passes, &mut rng)?;
        Ok(Self {
            records,
            passes,
            rng,
            sequence,
            position: 0,
        })
    }

    fn refill(&mut self) -> Result<(), SelectError> {
        // Keep the last shown entry so the new passes are checked against it.
        let keep_from = self.sequence.len().saturating_sub(1);
        self.sequence.drain(..keep_from);
        self.position = self.sequence.len();
        extend_endless_sequence(&mut self.sequence, self.records, self.passes, &mut self.rng)
    }
}

impl<'a, R: Rng> Iterator for TickerFeed<'a, R> {
    type Item = &'a Impact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.sequence.len() {
            self.refill().ok()?;
        }
        let impact = self.sequence.get(self.position).copied()?;
        self.position += 1;
        Some(impact)
    }
}

pub fn run_ticker(
    impacts: &[Impact],
    passes: usize,
    delay: Duration,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    impact_info!(
        "Starting ticker over {} impacts passes={} delay={:?} limit={:?}",
        impacts.len(),
        passes,
        delay,
        limit
    );
    let feed = TickerFeed::new(impacts, passes, rand::rng()).context("no impacts to show")?;

    let mut out = io::stdout();
    for (shown, impact) in feed.enumerate() {
        if limit.is_some_and(|limit| shown >= limit) {
            break;
        }
        writeln!(out, "{}", render_ticker_entry(impact, TICKER_SEPARATOR))
            .context("write to stdout")?;
        out.flush().context("flush stdout")?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn impacts(count: u32) -> Vec<Impact> {
        (1..=count)
            .map(|id| Impact::new(id, format!("E{}", id % 3), "", format!("statement {id}")))
            .collect()
    }

    #[test]
    fn feed_outlives_the_first_batch_without_adjacent_repeats() {
        let records = impacts(4);
        let feed = TickerFeed::new(&records, 2, StdRng::seed_from_u64(3)).unwrap();
        let shown: Vec<u32> = feed.take(50).map(|impact| impact.id).collect();
        assert_eq!(shown.len(), 50);
        assert!(shown.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn every_pass_shows_each_impact_once() {
        let records = impacts(5);
        let feed = TickerFeed::new(&records, 3, StdRng::seed_from_u64(8)).unwrap();
        let mut first_pass: Vec<u32> = feed.take(5).map(|impact| impact.id).collect();
        first_pass.sort_unstable();
        assert_eq!(first_pass, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_passes_still_produce_a_stream() {
        let records = impacts(2);
        let feed = TickerFeed::new(&records, 0, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(feed.take(7).count(), 7);
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = TickerFeed::new(&[], 10, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(SelectError::EmptyCollection)));
    }
}
