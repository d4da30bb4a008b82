use crate::entities::{Id, MapPoint, Venue};

/// Zoom thresholds and grouping distance of the map view.
///
/// Below `min_zoom_to_show` nothing is rendered, between the two
/// thresholds venues are grouped into clusters, at `cluster_zoom` and
/// above every venue gets its own marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    pub min_zoom_to_show: f64,
    pub cluster_zoom: f64,
    /// Grouping distance in raw degree space.
    pub distance_deg: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            min_zoom_to_show: 13.0,
            cluster_zoom: 16.0,
            distance_deg: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub venue_id: Id,
    pub pos: MapPoint,
}

/// A visual grouping of nearby venues shown at medium zoom levels.
///
/// The member ids are kept in absorption order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub centroid: MapPoint,
    pub venue_ids: Vec<Id>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.venue_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venue_ids.is_empty()
    }
}

/// Render instruction for the current zoom level.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Hidden,
    Clusters(Vec<Cluster>),
    Markers(Vec<Marker>),
}

pub fn render_map(venues: &[Venue], zoom: f64, config: &ClusterConfig) -> MapView {
    if zoom < config.min_zoom_to_show {
        return MapView::Hidden;
    }
    if zoom < config.cluster_zoom {
        MapView::Clusters(cluster_venues(venues, config.distance_deg))
    } else {
        MapView::Markers(
            venues
                .iter()
                .map(|venue| Marker {
                    venue_id: venue.id.clone(),
                    pos: venue.pos,
                })
                .collect(),
        )
    }
}

/// Single-pass greedy grouping in input order.
///
/// Each unassigned venue opens a new cluster seeded at its coordinate.
/// The remaining unassigned venues are absorbed when their Euclidean
/// distance in raw degree space to the cluster's running centroid is
/// below `distance_deg`; after every absorption the centroid is updated
/// as the incremental running mean of the absorbed coordinates.
///
/// The result depends on the input order and clusters are never merged
/// afterwards, even if they end up close after growing. O(n²) per
/// invocation, which is acceptable for a city-scale directory but does
/// not scale to large venue counts.
pub fn cluster_venues(venues: &[Venue], distance_deg: f64) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut assigned = vec![false; venues.len()];
    for i in 0..venues.len() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        debug_assert!(venues[i].pos.is_valid());
        let (mut lat, mut lng) = venues[i].pos.to_lat_lng_deg();
        let mut venue_ids = vec![venues[i].id.clone()];
        for j in i + 1..venues.len() {
            if assigned[j] {
                continue;
            }
            let (other_lat, other_lng) = venues[j].pos.to_lat_lng_deg();
            let dist = ((lat - other_lat).powi(2) + (lng - other_lng).powi(2)).sqrt();
            if dist < distance_deg {
                assigned[j] = true;
                venue_ids.push(venues[j].id.clone());
                let n = venue_ids.len() as f64;
                lat += (other_lat - lat) / n;
                lng += (other_lng - lng) / n;
            }
        }
        clusters.push(Cluster {
            centroid: MapPoint::from_lat_lng_deg(lat, lng),
            venue_ids,
        });
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use esmap_entities::builders::*;

    fn venue_at(id: &str, lat: f64, lng: f64) -> Venue {
        Venue::build().id(id).pos_deg(lat, lng).finish()
    }

    fn ids(cluster: &Cluster) -> Vec<&str> {
        cluster.venue_ids.iter().map(Id::as_str).collect()
    }

    #[test]
    fn below_min_zoom_nothing_is_rendered() {
        let venues = vec![venue_at("a", 37.5, 127.0)];
        let config = ClusterConfig::default();
        assert_eq!(render_map(&venues, 12.0, &config), MapView::Hidden);
        assert_eq!(render_map(&venues, 0.0, &config), MapView::Hidden);
    }

    #[test]
    fn at_cluster_zoom_every_venue_gets_its_own_marker() {
        let venues = vec![
            venue_at("a", 37.5000, 127.0000),
            venue_at("b", 37.5001, 127.0001),
            venue_at("c", 37.5002, 127.0002),
        ];
        let config = ClusterConfig::default();
        for zoom in [16.0, 17.0, 19.5] {
            match render_map(&venues, zoom, &config) {
                MapView::Markers(markers) => {
                    assert_eq!(markers.len(), venues.len());
                    for (marker, venue) in markers.iter().zip(&venues) {
                        assert_eq!(marker.venue_id, venue.id);
                        assert_eq!(marker.pos, venue.pos);
                    }
                }
                other => panic!("expected markers, got {other:?}"),
            }
        }
    }

    #[test]
    fn nearby_consecutive_venues_share_a_cluster() {
        let venues = vec![
            venue_at("a", 37.5000, 127.0000),
            venue_at("b", 37.5001, 127.0001),
        ];
        let clusters = cluster_venues(&venues, 0.05);
        assert_eq!(clusters.len(), 1);
        assert_eq!(ids(&clusters[0]), ["a", "b"]);
    }

    #[test]
    fn medium_zoom_clusters_high_zoom_separates() {
        let venues = vec![
            venue_at("a", 37.5000, 127.0000),
            venue_at("b", 37.5001, 127.0001),
        ];
        let config = ClusterConfig::default();
        match render_map(&venues, 14.0, &config) {
            MapView::Clusters(clusters) => {
                assert_eq!(clusters.len(), 1);
                assert_eq!(clusters[0].len(), 2);
            }
            other => panic!("expected clusters, got {other:?}"),
        }
        match render_map(&venues, 17.0, &config) {
            MapView::Markers(markers) => assert_eq!(markers.len(), 2),
            other => panic!("expected markers, got {other:?}"),
        }
    }

    #[test]
    fn distant_venues_stay_apart() {
        let venues = vec![
            venue_at("a", 37.498095, 127.02761),
            venue_at("b", 37.556289, 126.922648),
        ];
        let clusters = cluster_venues(&venues, 0.05);
        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), ["a"]);
        assert_eq!(ids(&clusters[1]), ["b"]);
    }

    #[test]
    fn centroid_is_the_running_mean_of_absorbed_coordinates() {
        let venues = vec![
            venue_at("a", 0.00, 0.0),
            venue_at("b", 0.02, 0.0),
            venue_at("c", 0.04, 0.0),
        ];
        let clusters = cluster_venues(&venues, 0.05);
        assert_eq!(clusters.len(), 1);
        let (lat, lng) = clusters[0].centroid.to_lat_lng_deg();
        assert!((lat - 0.02).abs() < 1e-6);
        assert!(lng.abs() < 1e-6);
    }

    #[test]
    fn absorption_is_measured_against_the_running_centroid() {
        // After "a" absorbs "b" the centroid moves to 0.02, which puts
        // "c" out of reach even though it is within the distance of "b".
        let venues = vec![
            venue_at("a", 0.00, 0.0),
            venue_at("b", 0.04, 0.0),
            venue_at("c", 0.08, 0.0),
        ];
        let clusters = cluster_venues(&venues, 0.05);
        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), ["a", "b"]);
        assert_eq!(ids(&clusters[1]), ["c"]);
    }

    #[test]
    fn every_venue_lands_in_exactly_one_cluster() {
        let venues: Vec<_> = (0..20)
            .map(|i| {
                venue_at(
                    &format!("v{i}"),
                    37.5 + f64::from(i) * 0.011,
                    127.0 + f64::from(i % 3) * 0.011,
                )
            })
            .collect();
        let clusters = cluster_venues(&venues, 0.05);
        let mut seen: Vec<&str> = clusters.iter().flat_map(ids).collect();
        seen.sort_unstable();
        let mut expected: Vec<_> = venues.iter().map(|v| v.id.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[test]
    fn fixed_input_order_is_deterministic() {
        let venues: Vec<_> = (0..10)
            .map(|i| venue_at(&format!("v{i}"), 37.5 + f64::from(i) * 0.03, 127.0))
            .collect();
        let first = cluster_venues(&venues, 0.05);
        let second = cluster_venues(&venues, 0.05);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(cluster_venues(&[], 0.05).is_empty());
        let config = ClusterConfig::default();
        assert_eq!(render_map(&[], 14.0, &config), MapView::Clusters(vec![]));
        assert_eq!(render_map(&[], 17.0, &config), MapView::Markers(vec![]));
    }
}
