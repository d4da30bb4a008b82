use esmap_core::{entities::Id, storage::StateStorage};

use super::Result;
use crate::app::AppState;

pub fn add_favorite<S: StateStorage>(app: &mut AppState, storage: &S, theme_id: Id) -> Result<bool> {
    let added = app.store.add_favorite(theme_id);
    if added {
        app.save_favorites(storage)?;
    }
    Ok(added)
}

pub fn remove_favorite<S: StateStorage>(
    app: &mut AppState,
    storage: &S,
    theme_id: &Id,
) -> Result<bool> {
    let removed = app.store.remove_favorite(theme_id);
    if removed {
        app.save_favorites(storage)?;
    }
    Ok(removed)
}
