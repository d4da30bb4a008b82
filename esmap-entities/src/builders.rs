pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, theme_builder::*, venue_builder::*};

pub use crate::{
    geo::MapPoint, id::Id, review::Review, score::*, theme::Theme, time::Timestamp, venue::Venue,
};

pub mod venue_builder {

    use super::*;

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn brand_name(mut self, name: &str) -> Self {
            self.venue.brand_name = name.into();
            self
        }
        pub fn branch_name(mut self, name: &str) -> Self {
            self.venue.branch_name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.venue.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.venue.pos = pos;
            self
        }
        pub fn pos_deg(mut self, lat: f64, lng: f64) -> Self {
            self.venue.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn website_url(mut self, url: &str) -> Self {
            self.venue.website_url = Some(url.parse().unwrap());
            self
        }
        pub fn theme(mut self, theme: Theme) -> Self {
            self.venue.themes.push(theme);
            self
        }
        pub fn themes(mut self, themes: Vec<Theme>) -> Self {
            self.venue.themes = themes;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    brand_name: "".into(),
                    branch_name: "".into(),
                    address: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    website_url: None,
                    phone: None,
                    themes: vec![],
                },
            }
        }
    }
}

pub mod theme_builder {

    use super::*;

    #[derive(Debug)]
    pub struct ThemeBuild {
        theme: Theme,
    }

    impl ThemeBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.theme.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.theme.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.theme.description = desc.into();
            self
        }
        pub fn scores(mut self, difficulty: i64, fear: i64, activity: i64, rec: i64) -> Self {
            self.theme.scores = ScoreProfile::clamped(difficulty, fear, activity, rec);
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.theme.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Theme {
            self.theme
        }
    }

    impl Builder for Theme {
        type Build = ThemeBuild;
        fn build() -> ThemeBuild {
            ThemeBuild {
                theme: Theme {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    poster_url: None,
                    scores: Default::default(),
                    tags: vec![],
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn theme_id(mut self, id: &str) -> Self {
            self.review.theme_id = id.into();
            self
        }
        pub fn nickname(mut self, nickname: &str) -> Self {
            self.review.nickname = nickname.into();
            self
        }
        pub fn scores(mut self, difficulty: i64, fear: i64, activity: i64, rec: i64) -> Self {
            self.review.scores = ScoreProfile::clamped(difficulty, fear, activity, rec);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    theme_id: Id::new(),
                    nickname: "".into(),
                    scores: Default::default(),
                    comment: "".into(),
                    created_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}
