use crate::{geo::MapPoint, id::Id, theme::*};

use url::Url;

/// A physical escape-room business location (brand + branch).
///
/// The themes are kept in insertion order, which is also the display
/// order. A venue without themes is legal but yields no entries in
/// theme-oriented views.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: Id,
    pub brand_name: String,
    pub branch_name: String,
    pub address: String,
    pub pos: MapPoint,
    pub website_url: Option<Url>,
    pub phone: Option<String>,
    pub themes: Vec<Theme>,
}

impl Venue {
    pub fn theme(&self, theme_id: &Id) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == *theme_id)
    }

    /// Flattens the themes of this venue into display-ready entries.
    pub fn theme_entries(&self) -> impl Iterator<Item = ThemeEntry> + '_ {
        self.themes.iter().map(move |theme| ThemeEntry {
            theme: theme.clone(),
            venue_id: self.id.clone(),
            brand_name: self.brand_name.clone(),
            branch_name: self.branch_name.clone(),
            address: self.address.clone(),
            pos: self.pos,
            website_url: self.website_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::builders::*;

    #[test]
    fn theme_entries_carry_denormalized_venue_fields() {
        let venue = Venue::build()
            .brand_name("Sherlock Holmes")
            .branch_name("Gangnam 1st")
            .address("123 Gangnam-daero")
            .pos_deg(37.5, 127.0)
            .theme(Theme::build().name("Light and Shadow").finish())
            .theme(Theme::build().name("Dungeon").finish())
            .finish();

        let entries: Vec<_> = venue.theme_entries().collect();
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert_eq!(entry.venue_id, venue.id);
            assert_eq!(entry.brand_name, "Sherlock Holmes");
            assert_eq!(entry.branch_name, "Gangnam 1st");
            assert_eq!(entry.address, "123 Gangnam-daero");
            assert_eq!(entry.pos, venue.pos);
        }
        assert_eq!(entries[0].theme.name, "Light and Shadow");
        assert_eq!(entries[1].theme.name, "Dungeon");
    }

    #[test]
    fn venue_without_themes_yields_no_entries() {
        let venue = Venue::build().finish();
        assert_eq!(venue.theme_entries().count(), 0);
    }
}
