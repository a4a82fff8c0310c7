use geo::Point;

/// a named subdivision of the modeled metropolitan area, the unit of
/// measurement for all generated metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct District {
    pub name: String,
    /// district centroid in (longitude, latitude) axis order, when known.
    /// consumed by map-rendering collaborators; not used by the metrics
    /// pipeline itself.
    pub coordinate: Option<Point<f64>>,
}

impl District {
    pub fn new(name: &str, coordinate: Option<(f64, f64)>) -> District {
        District {
            name: name.to_string(),
            coordinate: coordinate.map(|(lat, lon)| Point::new(lon, lat)),
        }
    }
}
