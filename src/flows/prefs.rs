use esmap_core::storage::StateStorage;

use super::Result;
use crate::app::AppState;

pub fn set_nickname<S: StateStorage>(app: &mut AppState, storage: &S, nickname: String) -> Result<()> {
    app.prefs.nickname = nickname;
    app.save_prefs(storage)?;
    Ok(())
}

pub fn toggle_notifications<S: StateStorage>(app: &mut AppState, storage: &S) -> Result<bool> {
    app.prefs.notifications_enabled = !app.prefs.notifications_enabled;
    app.save_prefs(storage)?;
    Ok(app.prefs.notifications_enabled)
}

/// Flips the local admin toggle. This is a UI mode, not a security
/// boundary.
pub fn toggle_admin<S: StateStorage>(app: &mut AppState, storage: &S) -> Result<bool> {
    app.prefs.is_admin = !app.prefs.is_admin;
    app.save_prefs(storage)?;
    Ok(app.prefs.is_admin)
}
