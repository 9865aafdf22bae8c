use tracing::debug;

use super::Popup;
use crate::models::{FilterKey, SortKey, ViewSelection};
use crate::ui::UiSurface;

/// `sort <date|amount>`. Re-derives the list from the stored transactions.
pub fn sort<S: UiSurface>(popup: &Popup<S>, args: &[&str]) -> Result<(), String> {
    let value = args
        .first()
        .ok_or_else(|| "Usage: `sort <date|amount>`".to_string())?;
    let sort = SortKey::from(*value);
    debug!("Sort selection changed to {}", sort.as_str());

    let state = popup.state();
    popup.commit(state.with_selection(ViewSelection {
        sort,
        ..state.selection
    }));
    Ok(())
}

/// `filter <all|transfer|swap|other>`
pub fn filter<S: UiSurface>(popup: &Popup<S>, args: &[&str]) -> Result<(), String> {
    let value = args
        .first()
        .ok_or_else(|| "Usage: `filter <all|transfer|swap|other>`".to_string())?;
    let filter = FilterKey::from(*value);
    debug!("Filter selection changed to {}", filter.as_str());

    let state = popup.state();
    popup.commit(state.with_selection(ViewSelection {
        filter,
        ..state.selection
    }));
    Ok(())
}
