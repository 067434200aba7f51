mod geo_location;
mod geo_point;
mod location_import;
mod output_format;
mod radius;
mod time_window;

pub use geo_location::GeoLocation;
pub use geo_point::GeoPoint;
pub use location_import::LocationImport;
pub use output_format::OutputFormat;
pub use radius::Radius;
pub use time_window::TimeWindow;
