mod district;
pub mod district_registry;

pub use district::District;
pub use district_registry::DistrictRegistry;
