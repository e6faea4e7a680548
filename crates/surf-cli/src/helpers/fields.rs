//! Copy `--rating`/`--height`/... flags onto an entry draft.

use surf_core::EntryDraft;

use crate::cli::EntryFieldArgs;

/// Apply every flag that was given. An empty string clears a text field.
pub fn apply_fields(draft: &mut EntryDraft, fields: &EntryFieldArgs) -> anyhow::Result<()> {
    if let Some(rating) = fields.rating {
        draft.set_rating(Some(rating))?;
    }
    if let Some(height) = &fields.height {
        draft.set_height(non_empty(height));
    }
    if let Some(period) = &fields.period {
        draft.set_period(non_empty(period));
    }
    if let Some(wind) = &fields.wind {
        draft.set_wind(non_empty(wind));
    }
    if let Some(location) = &fields.location {
        draft.set_location(non_empty(location));
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
