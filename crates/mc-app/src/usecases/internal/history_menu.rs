use anyhow::Result;

use mc_core::ports::{MenuItem, MenuOutcome, MenuPort, MenuRequest};
use mc_core::settings::MenuSettings;
use mc_core::Clip;

/// Secondary label of the synthetic clear row. Display only: outcomes are
/// resolved by row index, never by comparing this string, so a clip that
/// happens to render identically cannot be mistaken for the clear action.
const CLEAR_ROW_DESCRIPTION: &str = "Clear Clipboard";

/// What the user picked from a history menu.
pub(crate) enum HistoryChoice {
    /// A real clip row. Carries the clip as rendered, so the choice stays
    /// meaningful even if the history changed while the menu was pending.
    Clip(Clip),
    /// The synthetic "Clear Clipboard" row appended after the clips.
    ClearAll,
}

/// Renders `clips` as picker rows, appends the clear row, and maps the
/// host's answer back to a structural choice. `None` means the menu was
/// dismissed.
pub(crate) async fn present_history_menu(
    menu: &dyn MenuPort,
    clips: Vec<Clip>,
    settings: &MenuSettings,
) -> Result<Option<HistoryChoice>> {
    let mut items: Vec<MenuItem> = clips
        .iter()
        .map(|clip| MenuItem {
            label: clip.preview_label(),
            description: clip.language_tag(),
            detail: Some(clip.detail_line().to_string()),
        })
        .collect();
    items.push(MenuItem {
        label: String::new(),
        description: CLEAR_ROW_DESCRIPTION.to_string(),
        detail: None,
    });

    let outcome = menu
        .pick(MenuRequest {
            items,
            placeholder: settings.placeholder.clone(),
            match_on_description: settings.match_on_description,
        })
        .await?;

    Ok(match outcome {
        MenuOutcome::Cancelled => None,
        MenuOutcome::Chosen(index) if index == clips.len() => Some(HistoryChoice::ClearAll),
        // An index past the clear row can only come from a confused host;
        // treat it like a dismissal.
        MenuOutcome::Chosen(index) => clips.into_iter().nth(index).map(HistoryChoice::Clip),
    })
}
