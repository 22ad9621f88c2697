use colored::Colorize;
use impact_core::text::{prevent_orphan, split_highlight, HighlightedText};
use impact_core::{AppViewModel, Impact, LoadPhase, Notice, SelectionMode};

use super::constants::{FOOTNOTE, HELP, WRAP_WIDTH};

/// Lines for the carousel screen. Empty while a transition is in flight.
pub fn render(view: &AppViewModel) -> Vec<String> {
    if view.transitioning {
        return Vec::new();
    }

    let mut lines = match &view.phase {
        LoadPhase::Loading => vec!["Loading impacts...".to_string()],
        LoadPhase::Failed(reason) => vec![format!("Could not load impacts: {reason}")],
        LoadPhase::Ready => match &view.current {
            Some(current) => {
                let mut lines = wrap_highlighted(&current.text, WRAP_WIDTH);
                lines.push(String::new());
                if view.mode == SelectionMode::Sequential {
                    lines.push(format!("#{}", current.id).dimmed().to_string());
                }
                if let Some(id) = view.overwrite_id {
                    lines.push(format!("Showing ID #{id}").white().on_red().to_string());
                }
                lines
            }
            None if view.notice.is_none() => vec!["No impacts to show.".to_string()],
            None => Vec::new(),
        },
    };

    if let Some(notice) = view.notice {
        lines.push(describe_notice(notice).yellow().to_string());
    }
    lines.push(FOOTNOTE.dimmed().to_string());
    lines.push(HELP.dimmed().to_string());
    lines
}

/// One ticker entry: highlighted lead phrase, body, trailing separator.
pub fn render_ticker_entry(impact: &Impact, separator: &str) -> String {
    let text = split_highlight(&prevent_orphan(&impact.text), &impact.highlight);
    format!(
        "{}{}  {}",
        text.highlighted.blue().bold(),
        text.remaining,
        separator
    )
}

fn describe_notice(notice: Notice) -> String {
    match notice {
        Notice::MissingOverwrite { id } => format!("Impact #{id} not found."),
        Notice::UnknownStart { id } => {
            format!("Start impact #{id} not found; starting with the first impact.")
        }
        Notice::InvalidReference { id } => format!("No impact with id {id}."),
    }
}

/// Word-wraps at plain spaces only, so non-breaking spaces keep words together.
///
/// The highlighted lead phrase is a single unit and never breaks across lines.
fn wrap_highlighted(text: &HighlightedText, width: usize) -> Vec<String> {
    let mut units: Vec<(&str, bool)> = Vec::new();
    if !text.highlighted.is_empty() {
        units.push((text.highlighted.as_str(), true));
    }
    units.extend(
        text.remaining
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| (word, false)),
    );

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for (word, highlighted) in units {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        if highlighted {
            line.push_str(&word.blue().bold().to_string());
        } else {
            line.push_str(word);
        }
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
