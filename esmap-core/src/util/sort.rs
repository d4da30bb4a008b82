use std::cmp::Reverse;

use crate::entities::ThemeEntry;

/// List-view ordering. Score keys sort descending (best first), the
/// name key sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Recommendation,
    Difficulty,
    Fear,
    Activity,
    Name,
}

pub fn sort_theme_entries(entries: &mut [ThemeEntry], key: SortKey) {
    match key {
        SortKey::Recommendation => {
            entries.sort_by_key(|e| Reverse(e.theme.scores.recommendation));
        }
        SortKey::Difficulty => entries.sort_by_key(|e| Reverse(e.theme.scores.difficulty)),
        SortKey::Fear => entries.sort_by_key(|e| Reverse(e.theme.scores.fear)),
        SortKey::Activity => entries.sort_by_key(|e| Reverse(e.theme.scores.activity)),
        SortKey::Name => entries.sort_by(|a, b| a.theme.name.cmp(&b.theme.name)),
    }
}
