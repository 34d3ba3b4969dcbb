pub mod coordinates;
pub mod record;
pub mod route;

pub use coordinates::Coordinates;
pub use record::JournalRecord;
pub use route::{
    InterpolatedPath, RoutePreview, RouteQuery, RouteRequest, RouteResponse, SharedRoute,
    TravelMode,
};
