use std::{collections::BTreeSet, io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use esmap_boundary::JsonBranch;
use esmap_core::{
    entities::{Id, UserPrefs, Venue},
    storage::{
        DirectoryStorage, FavoritesStorage, PersistedDirectory, PrefsStorage, StorageError,
    },
};

const USER_STORAGE: &str = "user-storage";
const FAVORITE_STORAGE: &str = "favorite-storage";
const ESCAPE_DATA_STORAGE: &str = "escape-data-storage";

type Result<T> = std::result::Result<T, StorageError>;

/// Local key-value state persisted as one JSON document per logical
/// store, keyed by the store name.
#[derive(Clone)]
pub struct JsonFileStorage {
    json_store: Store,
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.json_store.get(key) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put<T: Serialize + for<'de> Deserialize<'de>>(&self, key: &str, record: &T) -> Result<()> {
        self.json_store.save_with_id(record, key)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    nickname: String,
    notifications_enabled: bool,
    is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct FavoriteRecord {
    favorites: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EscapeDataRecord {
    branches: Vec<JsonBranch>,
    pending_branches: Vec<JsonBranch>,
}

// Persisted documents written by older schema versions may contain
// entries that no longer convert; those are dropped with a warning
// instead of failing the whole load.
fn venues_from_records(records: Vec<JsonBranch>) -> Vec<Venue> {
    records
        .into_iter()
        .filter_map(|record| {
            Venue::try_from(record)
                .map_err(|err| {
                    log::warn!("Skipping persisted venue: {err}");
                })
                .ok()
        })
        .collect()
}

fn records_from_venues(venues: &[Venue]) -> Vec<JsonBranch> {
    venues.iter().cloned().map(Into::into).collect()
}

impl PrefsStorage for JsonFileStorage {
    fn load_prefs(&self) -> Result<Option<UserPrefs>> {
        Ok(self.get::<UserRecord>(USER_STORAGE)?.map(
            |UserRecord {
                 nickname,
                 notifications_enabled,
                 is_admin,
             }| UserPrefs {
                nickname,
                notifications_enabled,
                is_admin,
            },
        ))
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        let UserPrefs {
            nickname,
            notifications_enabled,
            is_admin,
        } = prefs.clone();
        self.put(
            USER_STORAGE,
            &UserRecord {
                nickname,
                notifications_enabled,
                is_admin,
            },
        )
    }
}

impl FavoritesStorage for JsonFileStorage {
    fn load_favorites(&self) -> Result<Option<Vec<Id>>> {
        Ok(self
            .get::<FavoriteRecord>(FAVORITE_STORAGE)?
            .map(|record| record.favorites.into_iter().map(Into::into).collect()))
    }

    fn save_favorites(&self, favorites: &BTreeSet<Id>) -> Result<()> {
        self.put(
            FAVORITE_STORAGE,
            &FavoriteRecord {
                favorites: favorites.iter().map(ToString::to_string).collect(),
            },
        )
    }
}

impl DirectoryStorage for JsonFileStorage {
    fn load_directory(&self) -> Result<Option<PersistedDirectory>> {
        Ok(self
            .get::<EscapeDataRecord>(ESCAPE_DATA_STORAGE)?
            .map(|record| PersistedDirectory {
                approved: venues_from_records(record.branches),
                pending: venues_from_records(record.pending_branches),
            }))
    }

    fn save_directory(&self, approved: &[Venue], pending: &[Venue]) -> Result<()> {
        self.put(
            ESCAPE_DATA_STORAGE,
            &EscapeDataRecord {
                branches: records_from_venues(approved),
                pending_branches: records_from_venues(pending),
            },
        )
    }
}
