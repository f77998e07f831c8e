mod stats;
mod store;

pub use stats::RegistryMetrics;
pub use store::{MiddlewareEntry, RouteEntry, RouteRegistry};
