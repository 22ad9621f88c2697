use impact_core::{ImpactId, Msg};

use super::constants::{JUMP_KEYS, NEXT_KEYS, PREV_KEYS, QUIT_KEYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Send(Msg),
    Quit,
}

/// Map one line typed on stdin to a command; `None` for anything unrecognized.
pub fn parse_command(line: &str) -> Option<UserCommand> {
    let line = line.trim();
    if NEXT_KEYS.contains(&line) {
        return Some(UserCommand::Send(Msg::NextPressed));
    }
    if PREV_KEYS.contains(&line) {
        return Some(UserCommand::Send(Msg::PreviousPressed));
    }
    if QUIT_KEYS.contains(&line) {
        return Some(UserCommand::Quit);
    }

    let rest = JUMP_KEYS.iter().find_map(|key| line.strip_prefix(key))?;
    let id: ImpactId = rest.trim().parse().ok()?;
    Some(UserCommand::Send(Msg::JumpRequested(id)))
}
