use esmap_core::{
    entities::UserPrefs,
    reviews::ReviewLedger,
    storage::{StateStorage, StorageError},
    store::ModerationStore,
};

/// Root composition of the client state.
///
/// All three stores are owned here and passed by reference to the
/// flows; there are no module-level singletons. Persistence happens at
/// defined lifecycle points: [`AppState::load`] on start and an
/// explicit save inside each mutating flow.
#[derive(Debug, Default)]
pub struct AppState {
    pub prefs: UserPrefs,
    pub store: ModerationStore,
    pub reviews: ReviewLedger,
}

impl AppState {
    /// Restores the persisted state.
    ///
    /// The merge is asymmetric on purpose: pending reports are carried
    /// over verbatim, while the cached approved venues are discarded
    /// and replaced by the next fetch. In-flight user reports survive
    /// backend schema migrations that way.
    pub fn load<S: StateStorage>(storage: &S) -> Result<Self, StorageError> {
        let mut app = Self {
            prefs: storage.load_prefs()?.unwrap_or_default(),
            ..Self::default()
        };
        if let Some(favorites) = storage.load_favorites()? {
            app.store.restore_favorites(favorites);
        }
        if let Some(directory) = storage.load_directory()? {
            if !directory.approved.is_empty() {
                log::debug!(
                    "Discarding {} cached venues; the approved collection is replaced by the next fetch",
                    directory.approved.len()
                );
            }
            app.store.restore_pending(directory.pending);
        }
        Ok(app)
    }

    pub fn save_directory<S: StateStorage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save_directory(self.store.approved(), self.store.pending())
    }

    pub fn save_favorites<S: StateStorage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save_favorites(self.store.favorites())
    }

    pub fn save_prefs<S: StateStorage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save_prefs(&self.prefs)
    }
}
