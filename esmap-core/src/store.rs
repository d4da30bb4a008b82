use std::collections::BTreeSet;

use crate::entities::{Id, ThemeEntry, Venue};

/// Owns the three disjoint-by-invariant collections of the directory:
/// approved venues, pending (reported) venues and the favorite theme-id
/// set, together with the transitions between them.
///
/// A venue id lives in exactly one of {approved, pending} at any time.
/// There is no transition from approved back to pending and no
/// edit-in-place; edits require delete + re-report.
#[derive(Debug, Default)]
pub struct ModerationStore {
    approved: Vec<Venue>,
    pending: Vec<Venue>,
    favorites: BTreeSet<Id>,
}

impl ModerationStore {
    pub fn approved(&self) -> &[Venue] {
        &self.approved
    }

    pub fn pending(&self) -> &[Venue] {
        &self.pending
    }

    pub fn favorites(&self) -> &BTreeSet<Id> {
        &self.favorites
    }

    /// Wholesale replacement of the approved collection, used when a
    /// fresh fetch arrives. The pending collection is not touched.
    pub fn replace_approved(&mut self, venues: Vec<Venue>) {
        self.approved = venues;
    }

    /// Restores the pending collection from persisted state.
    pub fn restore_pending(&mut self, venues: Vec<Venue>) {
        self.pending = venues;
    }

    /// Restores the favorite set from persisted state. Duplicate
    /// entries written by older versions collapse into the set.
    pub fn restore_favorites(&mut self, favorites: impl IntoIterator<Item = Id>) {
        self.favorites = favorites.into_iter().collect();
    }

    /// Appends a reported venue to the pending collection.
    ///
    /// Duplicate reports of the same place are accepted as separate
    /// pending entries; coordinate bounds are not re-validated here.
    pub fn report(&mut self, venue: Venue) {
        log::info!("New report {} awaiting approval", venue.id);
        self.pending.push(venue);
    }

    /// Moves a pending venue into the approved collection.
    ///
    /// Approving an id that is not pending (already approved or
    /// vanished) is a silent no-op.
    pub fn approve(&mut self, id: &Id) -> bool {
        let Some(pos) = self.pending.iter().position(|v| v.id == *id) else {
            return false;
        };
        let venue = self.pending.remove(pos);
        log::info!("Approved report {}", venue.id);
        self.approved.push(venue);
        true
    }

    /// Removes a pending venue. The data is discarded, not archived.
    pub fn reject(&mut self, id: &Id) -> bool {
        let Some(pos) = self.pending.iter().position(|v| v.id == *id) else {
            return false;
        };
        self.pending.remove(pos);
        log::info!("Rejected report {id}");
        true
    }

    /// Removes an approved venue together with its themes.
    ///
    /// Favorites and reviews referencing the removed themes are left
    /// dangling; lookups degrade by omitting them.
    pub fn delete(&mut self, id: &Id) -> bool {
        let Some(pos) = self.approved.iter().position(|v| v.id == *id) else {
            return false;
        };
        let venue = self.approved.remove(pos);
        log::info!("Deleted venue {} with {} themes", venue.id, venue.themes.len());
        true
    }

    pub fn add_favorite(&mut self, theme_id: Id) -> bool {
        self.favorites.insert(theme_id)
    }

    pub fn remove_favorite(&mut self, theme_id: &Id) -> bool {
        self.favorites.remove(theme_id)
    }

    pub fn is_favorite(&self, theme_id: &Id) -> bool {
        self.favorites.contains(theme_id)
    }

    pub fn venue(&self, id: &Id) -> Option<&Venue> {
        self.approved.iter().find(|v| v.id == *id)
    }

    /// Flattens every theme of every approved venue into display-ready
    /// entries with the denormalized parent fields attached. Pure
    /// projection, recomputed on demand.
    pub fn all_themes(&self) -> Vec<ThemeEntry> {
        self.approved
            .iter()
            .flat_map(Venue::theme_entries)
            .collect()
    }

    /// The favorited subset of `all_themes()`. Favorites whose theme no
    /// longer exists are silently omitted.
    pub fn favorite_themes(&self) -> Vec<ThemeEntry> {
        self.all_themes()
            .into_iter()
            .filter(|entry| self.favorites.contains(&entry.theme.id))
            .collect()
    }

    /// Looks a single theme up across the approved venues. `None` means
    /// the item no longer exists.
    pub fn theme_entry(&self, theme_id: &Id) -> Option<ThemeEntry> {
        self.all_themes()
            .into_iter()
            .find(|entry| entry.theme.id == *theme_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esmap_entities::builders::*;

    fn reported_venue() -> Venue {
        Venue::build()
            .id("branch-1700000000123")
            .brand_name("A")
            .branch_name("B")
            .pos_deg(37.5, 127.0)
            .theme(
                Theme::build()
                    .id("theme-1700000000123")
                    .name("First Light")
                    .scores(5, 0, 5, 5)
                    .finish(),
            )
            .finish()
    }

    #[test]
    fn report_lands_in_pending_only() {
        let mut store = ModerationStore::default();
        store.report(reported_venue());
        assert_eq!(store.pending().len(), 1);
        assert!(store.approved().is_empty());
    }

    #[test]
    fn approve_moves_report_into_approved() {
        let mut store = ModerationStore::default();
        let venue = reported_venue();
        let id = venue.id.clone();
        store.report(venue);
        assert!(store.approve(&id));
        assert!(store.pending().is_empty());
        assert_eq!(store.approved().len(), 1);
        assert_eq!(store.approved()[0].id, id);
    }

    #[test]
    fn approve_then_reject_leaves_approved_untouched() {
        let mut store = ModerationStore::default();
        let venue = reported_venue();
        let id = venue.id.clone();
        store.report(venue);
        assert!(store.approve(&id));
        // The id already moved, so reject finds nothing pending.
        assert!(!store.reject(&id));
        assert_eq!(store.approved().len(), 1);
    }

    #[test]
    fn approving_a_vanished_report_is_a_silent_no_op() {
        let mut store = ModerationStore::default();
        assert!(!store.approve(&"nowhere".into()));
        assert!(store.approved().is_empty());
        assert!(store.pending().is_empty());
    }

    #[test]
    fn reject_discards_the_report() {
        let mut store = ModerationStore::default();
        let venue = reported_venue();
        let id = venue.id.clone();
        store.report(venue);
        assert!(store.reject(&id));
        assert!(store.pending().is_empty());
        assert!(store.approved().is_empty());
    }

    #[test]
    fn duplicate_reports_are_kept_as_separate_entries() {
        let mut store = ModerationStore::default();
        store.report(reported_venue());
        store.report(reported_venue());
        assert_eq!(store.pending().len(), 2);
    }

    #[test]
    fn delete_removes_venue_and_its_themes_from_projections() {
        let mut store = ModerationStore::default();
        let venue = reported_venue();
        let id = venue.id.clone();
        let theme_id = venue.themes[0].id.clone();
        store.replace_approved(vec![venue]);
        assert!(store.theme_entry(&theme_id).is_some());
        assert!(store.delete(&id));
        assert!(store.approved().is_empty());
        assert!(store.all_themes().is_empty());
        assert!(store.theme_entry(&theme_id).is_none());
        // Deleting again is a no-op.
        assert!(!store.delete(&id));
    }

    #[test]
    fn favorites_behave_as_a_set() {
        let mut store = ModerationStore::default();
        assert!(store.add_favorite("theme-1".into()));
        // The second add has no effect, so a single removal clears it.
        assert!(!store.add_favorite("theme-1".into()));
        assert!(store.is_favorite(&"theme-1".into()));
        assert!(store.remove_favorite(&"theme-1".into()));
        assert!(!store.is_favorite(&"theme-1".into()));
        assert!(!store.remove_favorite(&"theme-1".into()));
    }

    #[test]
    fn dangling_favorites_are_omitted_from_the_projection() {
        let mut store = ModerationStore::default();
        let venue = reported_venue();
        let venue_id = venue.id.clone();
        let theme_id = venue.themes[0].id.clone();
        store.replace_approved(vec![venue]);
        store.add_favorite(theme_id.clone());
        assert_eq!(store.favorite_themes().len(), 1);
        store.delete(&venue_id);
        // The favorite id is still set, but the projection degrades.
        assert!(store.is_favorite(&theme_id));
        assert!(store.favorite_themes().is_empty());
    }

    #[test]
    fn all_themes_reports_every_theme_exactly_once() {
        let mut store = ModerationStore::default();
        let venues = vec![
            Venue::build()
                .id("v1")
                .brand_name("Sherlock Holmes")
                .branch_name("Gangnam 1st")
                .address("123 Gangnam-daero")
                .pos_deg(37.498095, 127.02761)
                .theme(Theme::build().id("t1").name("Light and Shadow").finish())
                .theme(Theme::build().id("t2").name("Dungeon").finish())
                .finish(),
            Venue::build()
                .id("v2")
                .brand_name("Key Escape")
                .branch_name("Hongdae")
                .pos_deg(37.556289, 126.922648)
                .theme(Theme::build().id("t3").name("Beep Bo").finish())
                .finish(),
        ];
        store.replace_approved(venues);
        let entries = store.all_themes();
        let mut theme_ids: Vec<_> = entries.iter().map(|e| e.theme.id.as_str()).collect();
        theme_ids.sort_unstable();
        assert_eq!(theme_ids, ["t1", "t2", "t3"]);
        let first = entries.iter().find(|e| e.theme.id.as_str() == "t1").unwrap();
        assert_eq!(first.brand_name, "Sherlock Holmes");
        assert_eq!(first.branch_name, "Gangnam 1st");
        assert_eq!(first.address, "123 Gangnam-daero");
        assert_eq!(first.venue_id.as_str(), "v1");
    }

    #[test]
    fn replace_approved_keeps_pending_reports() {
        let mut store = ModerationStore::default();
        store.report(reported_venue());
        store.replace_approved(vec![Venue::build().id("fresh").finish()]);
        assert_eq!(store.pending().len(), 1);
        assert_eq!(store.approved().len(), 1);
        assert_eq!(store.approved()[0].id.as_str(), "fresh");
    }
}
