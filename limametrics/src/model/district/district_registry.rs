use super::District;
use geo::Point;
use itertools::Itertools;

/// the 22 districts of Lima Metropolitana tracked by this model, with
/// centroid coordinates in (latitude, longitude) order.
const LIMA_DISTRICTS: [(&str, f64, f64); 22] = [
    ("Lima Cercado", -12.0464, -77.0428),
    ("Miraflores", -12.1211, -77.0297),
    ("San Isidro", -12.0982, -77.0344),
    ("La Molina", -12.0833, -76.9333),
    ("Comas", -11.9364, -77.0622),
    ("San Juan de Lurigancho", -11.9941, -76.9983),
    ("San Martín de Porres", -11.9911, -77.0603),
    ("Villa El Salvador", -12.1972, -76.9361),
    ("Ate", -12.0293, -76.9348),
    ("Santiago de Surco", -12.1392, -76.9814),
    ("Callao", -12.0566, -77.1181),
    ("Los Olivos", -11.9565, -77.0697),
    ("Chorrillos", -12.1758, -77.0165),
    ("Surquillo", -12.1207, -77.0244),
    ("Barranco", -12.1496, -77.0219),
    ("Magdalena del Mar", -12.0933, -77.0667),
    ("Pueblo Libre", -12.0747, -77.0656),
    ("Jesús María", -12.0736, -77.0438),
    ("Lince", -12.0861, -77.0336),
    ("San Borja", -12.1022, -76.9944),
    ("Breña", -12.0561, -77.0497),
    ("San Miguel", -12.0889, -77.0797),
];

/// static list of known districts in canonical ordering. generated tables
/// contain exactly one row per registered district, in this ordering.
pub struct DistrictRegistry {
    districts: Vec<District>,
}

impl DistrictRegistry {
    /// builds the registry for Lima Metropolitana.
    pub fn lima_metropolitana() -> DistrictRegistry {
        let districts = LIMA_DISTRICTS
            .iter()
            .map(|(name, lat, lon)| District::new(name, Some((*lat, *lon))))
            .collect_vec();
        DistrictRegistry { districts }
    }

    /// builds a registry from an arbitrary list of names, without
    /// coordinates. used for testing and for callers with their own
    /// district sets.
    pub fn from_names(names: &[&str]) -> DistrictRegistry {
        let districts = names
            .iter()
            .map(|name| District::new(name, None))
            .collect_vec();
        DistrictRegistry { districts }
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.districts.iter().any(|d| d.name == name)
    }

    /// centroid lookup for map display. None when the district is unknown
    /// or carries no coordinate.
    pub fn coordinate_for(&self, name: &str) -> Option<Point<f64>> {
        self.districts
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| d.coordinate)
    }
}
