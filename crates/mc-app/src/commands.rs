//! Host-bindable command surface.
//!
//! The host registers one keybinding per entry of [`Command::bindings`]
//! and hands invocations back as [`Command`] values (or raw ids through
//! [`Command::from_id`]).

use serde::{Deserialize, Serialize};

use mc_core::Settings;

/// Prefix of every command id the host binds.
const COMMAND_NAMESPACE: &str = "multiclip";

/// Every invocable action, one per keybinding the host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Capture the selection(s), then run the host's native copy.
    Copy,
    /// Capture the selection(s), then run the host's native cut.
    Cut,
    /// Paste the clip in the given 1-based slot, then the native paste.
    PasteSlot(usize),
    /// Browse the full history.
    ShowHistory,
    /// Browse clips matching the active document's language.
    ShowHistoryByLanguage,
    /// Browse clips captured from the active document's file.
    ShowHistoryByFile,
    /// Interactively remove a clip.
    RemoveClip,
}

impl Command {
    /// Stable id the host uses to bind and invoke this command.
    pub fn id(&self) -> String {
        match self {
            Command::Copy => format!("{COMMAND_NAMESPACE}.copy"),
            Command::Cut => format!("{COMMAND_NAMESPACE}.cut"),
            Command::PasteSlot(slot) => format!("{COMMAND_NAMESPACE}.paste-{slot}"),
            Command::ShowHistory => format!("{COMMAND_NAMESPACE}.show-history"),
            Command::ShowHistoryByLanguage => {
                format!("{COMMAND_NAMESPACE}.show-history-language")
            }
            Command::ShowHistoryByFile => format!("{COMMAND_NAMESPACE}.show-history-file"),
            Command::RemoveClip => format!("{COMMAND_NAMESPACE}.remove-clip"),
        }
    }

    /// Parses a command id back into a command. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        let name = id
            .strip_prefix(COMMAND_NAMESPACE)?
            .strip_prefix('.')?;
        match name {
            "copy" => Some(Command::Copy),
            "cut" => Some(Command::Cut),
            "show-history" => Some(Command::ShowHistory),
            "show-history-language" => Some(Command::ShowHistoryByLanguage),
            "show-history-file" => Some(Command::ShowHistoryByFile),
            "remove-clip" => Some(Command::RemoveClip),
            other => {
                let slot = other.strip_prefix("paste-")?.parse().ok()?;
                Some(Command::PasteSlot(slot))
            }
        }
    }

    /// The full set of commands a host should register, slot count taken
    /// from settings.
    pub fn bindings(settings: &Settings) -> Vec<Command> {
        let mut commands = vec![Command::Copy, Command::Cut];
        commands.extend((1..=settings.paste.slots).map(Command::PasteSlot));
        commands.extend([
            Command::ShowHistory,
            Command::ShowHistoryByLanguage,
            Command::ShowHistoryByFile,
            Command::RemoveClip,
        ]);
        commands
    }
}
