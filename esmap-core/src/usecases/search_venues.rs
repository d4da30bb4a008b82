use super::prelude::*;

/// Case-insensitive text search over brand name, branch name and theme
/// names. An empty query matches everything.
pub fn search_venues<'v>(venues: &'v [Venue], query: &str) -> Vec<&'v Venue> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return venues.iter().collect();
    }
    venues
        .iter()
        .filter(|venue| {
            venue.brand_name.to_lowercase().contains(&query)
                || venue.branch_name.to_lowercase().contains(&query)
                || venue
                    .themes
                    .iter()
                    .any(|theme| theme.name.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use esmap_entities::builders::*;

    fn venues() -> Vec<Venue> {
        vec![
            Venue::build()
                .id("v1")
                .brand_name("Sherlock Holmes")
                .branch_name("Gangnam 1st")
                .theme(Theme::build().name("Light and Shadow").finish())
                .finish(),
            Venue::build()
                .id("v2")
                .brand_name("Key Escape")
                .branch_name("Hongdae")
                .theme(Theme::build().name("Beep Bo").finish())
                .finish(),
        ]
    }

    #[test]
    fn matches_brand_branch_or_theme_name() {
        let venues = venues();
        assert_eq!(search_venues(&venues, "sherlock").len(), 1);
        assert_eq!(search_venues(&venues, "HONGDAE").len(), 1);
        assert_eq!(search_venues(&venues, "shadow")[0].id.as_str(), "v1");
        assert!(search_venues(&venues, "laser maze").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let venues = venues();
        assert_eq!(search_venues(&venues, "").len(), 2);
        assert_eq!(search_venues(&venues, "   ").len(), 2);
    }
}
