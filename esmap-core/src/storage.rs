// Persistence boundary of the client state.
//
// Each storage trait is responsible for a single logical store and is
// invoked at defined lifecycle points: load on start, save on mutation.
// There is no implicit write-through interception layer.

use std::{collections::BTreeSet, io};

use thiserror::Error;

use crate::entities::{Id, UserPrefs, Venue};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, StorageError>;

pub trait PrefsStorage {
    /// `Ok(None)` when nothing has been persisted yet.
    fn load_prefs(&self) -> Result<Option<UserPrefs>>;
    fn save_prefs(&self, prefs: &UserPrefs) -> Result<()>;
}

pub trait FavoritesStorage {
    fn load_favorites(&self) -> Result<Option<Vec<Id>>>;
    fn save_favorites(&self, favorites: &BTreeSet<Id>) -> Result<()>;
}

/// Snapshot of the directory collections as persisted locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedDirectory {
    pub approved: Vec<Venue>,
    pub pending: Vec<Venue>,
}

pub trait DirectoryStorage {
    fn load_directory(&self) -> Result<Option<PersistedDirectory>>;
    fn save_directory(&self, approved: &[Venue], pending: &[Venue]) -> Result<()>;
}

pub trait StateStorage: PrefsStorage + FavoritesStorage + DirectoryStorage {}

impl<T: PrefsStorage + FavoritesStorage + DirectoryStorage> StateStorage for T {}
