pub mod coordinates;
pub mod route;
pub mod traffic;

pub use coordinates::Coordinates;
pub use route::{OptimizeRequest, OptimizeResponse, RouteCandidate, WeatherSnapshot};
pub use traffic::{TrafficLeg, TrafficRoute, TrafficSummary};
