use esmap_core::{entities::Id, storage::StateStorage};

use super::Result;
use crate::app::AppState;

/// Moves a pending report into the approved collection. Approving an
/// id that vanished in the meantime is a silent no-op.
pub fn approve_report<S: StateStorage>(
    app: &mut AppState,
    storage: &S,
    id: &Id,
) -> Result<bool> {
    let approved = app.store.approve(id);
    if approved {
        app.save_directory(storage)?;
    } else {
        log::info!("Report {id} is not pending; nothing to approve");
    }
    Ok(approved)
}

/// Discards a pending report.
pub fn reject_report<S: StateStorage>(app: &mut AppState, storage: &S, id: &Id) -> Result<bool> {
    let rejected = app.store.reject(id);
    if rejected {
        app.save_directory(storage)?;
    } else {
        log::info!("Report {id} is not pending; nothing to reject");
    }
    Ok(rejected)
}

/// Removes an approved venue together with its themes.
pub fn delete_venue<S: StateStorage>(app: &mut AppState, storage: &S, id: &Id) -> Result<bool> {
    let deleted = app.store.delete(id);
    if deleted {
        app.save_directory(storage)?;
    } else {
        log::info!("Venue {id} is not approved; nothing to delete");
    }
    Ok(deleted)
}
