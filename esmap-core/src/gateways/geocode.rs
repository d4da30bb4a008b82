pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)>;
}
