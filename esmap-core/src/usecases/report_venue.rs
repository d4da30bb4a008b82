use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

/// User input of the venue-report form. The address is free text and is
/// resolved to a position through the geocoding gateway before the
/// report can be created.
#[derive(Debug, Clone)]
pub struct NewVenueReport {
    pub brand_name: String,
    pub branch_name: String,
    pub address: String,
    pub website_url: Option<String>,
    pub phone: Option<String>,
    pub theme: NewThemeReport,
}

#[derive(Debug, Clone)]
pub struct NewThemeReport {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: i64,
    pub fear: i64,
    pub activity: i64,
    pub recommendation: i64,
}

/// Validates a report, resolves its address and builds the pending
/// venue with its single theme and a timestamp-derived identity.
pub fn prepare_venue_report(
    geocoder: &dyn GeoCodingGateway,
    report: NewVenueReport,
    submitted_at: Timestamp,
) -> Result<Venue> {
    let NewVenueReport {
        brand_name,
        branch_name,
        address,
        website_url,
        phone,
        theme,
    } = report;
    let brand_name = brand_name.trim().to_owned();
    if brand_name.is_empty() {
        return Err(Error::BrandName);
    }
    let branch_name = branch_name.trim().to_owned();
    if branch_name.is_empty() {
        return Err(Error::BranchName);
    }
    let address = address.trim().to_owned();
    if address.is_empty() {
        return Err(Error::Address);
    }
    let theme_name = theme.name.trim().to_owned();
    if theme_name.is_empty() {
        return Err(Error::ThemeName);
    }

    let (lat, lng) = geocoder
        .resolve_address_lat_lng(&address)
        .ok_or(Error::UnresolvedAddress)?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;

    let website_url = website_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| url.parse().map_err(|_| Error::Url))
        .transpose()?;

    let NewThemeReport {
        description,
        tags,
        difficulty,
        fear,
        activity,
        recommendation,
        ..
    } = theme;

    Ok(Venue {
        id: Id::from_report_timestamp("branch", submitted_at),
        brand_name,
        branch_name,
        address,
        pos,
        website_url,
        phone: phone.filter(|p| !p.trim().is_empty()),
        themes: vec![Theme {
            id: Id::from_report_timestamp("theme", submitted_at),
            name: theme_name,
            description,
            poster_url: None,
            scores: ScoreProfile::clamped(difficulty, fear, activity, recommendation),
            tags,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGeocoder(Option<(f64, f64)>);

    impl GeoCodingGateway for FixedGeocoder {
        fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
            self.0
        }
    }

    fn default_report() -> NewVenueReport {
        NewVenueReport {
            brand_name: "A".into(),
            branch_name: "B".into(),
            address: "123 Gangnam-daero".into(),
            website_url: None,
            phone: None,
            theme: NewThemeReport {
                name: "First Light".into(),
                description: "".into(),
                tags: vec![],
                difficulty: 5,
                fear: 0,
                activity: 5,
                recommendation: 5,
            },
        }
    }

    #[test]
    fn valid_report_becomes_a_pending_venue() {
        let geocoder = FixedGeocoder(Some((37.5, 127.0)));
        let at = Timestamp::from_millis(1_700_000_000_123);
        let venue = prepare_venue_report(&geocoder, default_report(), at).unwrap();
        assert_eq!(venue.id.as_str(), "branch-1700000000123");
        assert_eq!(venue.themes.len(), 1);
        assert_eq!(venue.themes[0].id.as_str(), "theme-1700000000123");
        let (lat, lng) = venue.pos.to_lat_lng_deg();
        assert!((lat - 37.5).abs() < 1e-6);
        assert!((lng - 127.0).abs() < 1e-6);
        assert_eq!(u8::from(venue.themes[0].scores.difficulty), 5);
    }

    #[test]
    fn missing_required_fields_block_the_report() {
        let geocoder = FixedGeocoder(Some((37.5, 127.0)));
        let at = Timestamp::from_millis(0);
        for (patch, expected) in [
            (
                Box::new(|r: &mut NewVenueReport| r.brand_name = "  ".into())
                    as Box<dyn Fn(&mut NewVenueReport)>,
                Error::BrandName,
            ),
            (
                Box::new(|r: &mut NewVenueReport| r.branch_name = "".into()),
                Error::BranchName,
            ),
            (
                Box::new(|r: &mut NewVenueReport| r.address = "".into()),
                Error::Address,
            ),
            (
                Box::new(|r: &mut NewVenueReport| r.theme.name = " ".into()),
                Error::ThemeName,
            ),
        ] {
            let mut report = default_report();
            patch(&mut report);
            assert_eq!(
                prepare_venue_report(&geocoder, report, at).unwrap_err(),
                expected
            );
        }
    }

    #[test]
    fn unresolved_address_blocks_the_report() {
        let geocoder = FixedGeocoder(None);
        let at = Timestamp::from_millis(0);
        assert_eq!(
            prepare_venue_report(&geocoder, default_report(), at).unwrap_err(),
            Error::UnresolvedAddress
        );
    }

    #[test]
    fn out_of_range_geocoder_result_is_rejected() {
        let geocoder = FixedGeocoder(Some((95.0, 127.0)));
        let at = Timestamp::from_millis(0);
        assert_eq!(
            prepare_venue_report(&geocoder, default_report(), at).unwrap_err(),
            Error::InvalidPosition
        );
    }

    #[test]
    fn scores_are_clamped_to_range() {
        let geocoder = FixedGeocoder(Some((37.5, 127.0)));
        let at = Timestamp::from_millis(0);
        let mut report = default_report();
        report.theme.difficulty = 12;
        report.theme.fear = -4;
        let venue = prepare_venue_report(&geocoder, report, at).unwrap();
        assert_eq!(venue.themes[0].scores.difficulty, Score::max());
        assert_eq!(venue.themes[0].scores.fear, Score::min());
    }

    #[test]
    fn invalid_website_url_is_an_error() {
        let geocoder = FixedGeocoder(Some((37.5, 127.0)));
        let at = Timestamp::from_millis(0);
        let mut report = default_report();
        report.website_url = Some("not a url".into());
        assert_eq!(
            prepare_venue_report(&geocoder, report, at).unwrap_err(),
            Error::Url
        );
    }
}
