use std::io::{self, Write};

use anyhow::Context;
use impact_core::{filter_by_entity, impact_stats, Impact};

pub fn run_stats(impacts: &[Impact]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for line in stats_lines(impacts) {
        writeln!(out, "{line}").context("write to stdout")?;
    }
    Ok(())
}

fn stats_lines(impacts: &[Impact]) -> Vec<String> {
    let stats = impact_stats(impacts);
    let mut lines = vec![
        format!("Impacts:  {}", stats.total),
        format!("Entities: {}", stats.unique_entities),
    ];
    for entity in &stats.entities {
        let count = filter_by_entity(impacts, entity).len();
        lines.push(format!("  {entity:<24} {count}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn lists_entities_with_counts() {
        let impacts = [
            Impact::new(1, "WHO", "", "a"),
            Impact::new(2, "FAO", "", "b"),
            Impact::new(3, "WHO", "", "c"),
        ];
        let lines = stats_lines(&impacts);
        assert_eq!(lines[0], "Impacts:  3");
        assert_eq!(lines[1], "Entities: 2");
        assert_eq!(words(&lines[2]), ["FAO", "1"]);
        assert_eq!(words(&lines[3]), ["WHO", "2"]);
    }
}
