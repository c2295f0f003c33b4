//! Text and JSON frames.

use tamago_core::{ActionOutcome, Demeanor, PetSnapshot, Rejection};

use crate::commands::HELP;
use crate::session::Reply;

/// Cells in a need bar.
pub const BAR_WIDTH: usize = 20;

/// Shown instead of the status line once the pet has died.
pub const DEAD_BANNER: &str = "Your pet needs more care! Start over with `reset`.";

/// Proportional bar for a 0–100 value, e.g. `[#####---------------]`.
#[must_use]
pub fn bar(value: u8) -> String {
    let filled = (usize::from(value.min(100)) * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Multi-line text frame for a terminal.
#[must_use]
pub fn text_frame(snapshot: &PetSnapshot) -> String {
    let mood = match snapshot.demeanor {
        Demeanor::Happy => " ~bouncing~",
        Demeanor::Sad => " ~drooping~",
        Demeanor::Tired => " ~yawning~",
        Demeanor::Calm => "",
    };
    let mut lines = vec![format!("{}  {}{}", snapshot.expression, snapshot.name, mood)];
    lines.extend(
        [
            ("Hunger", snapshot.hunger),
            ("Energy", snapshot.energy),
            ("Happiness", snapshot.happiness),
        ]
        .into_iter()
        .map(|(label, value)| format!("{label:<10}{} {value:>3}", bar(value))),
    );
    lines.push(format!("💭 {}", snapshot.thought));
    lines.push(if snapshot.dead {
        DEAD_BANNER.to_string()
    } else {
        format!("Status: {}", snapshot.status)
    });
    lines.join("\n")
}

/// One-line message describing a reply, if it warrants one.
#[must_use]
pub fn reply_message(reply: &Reply) -> Option<String> {
    match reply {
        Reply::Acted { action, outcome: ActionOutcome::Accepted } => Some(format!("> {action}")),
        Reply::Acted {
            action,
            outcome: ActionOutcome::Rejected(reason),
        } => Some(match reason {
            Rejection::Busy => format!("> {action}: still busy, try again in a moment"),
            other => format!("> {action}: refused ({other})"),
        }),
        Reply::Disabled => Some(format!("> {DEAD_BANNER}")),
        Reply::Renamed(name) => Some(format!("> renamed to {name}")),
        Reply::Reset => Some("> a new pet hatches".to_string()),
        Reply::Help => Some(HELP.to_string()),
        Reply::Status | Reply::Quit => None,
    }
}
