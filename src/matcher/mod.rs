mod params;
pub mod resolver;

pub(crate) use params::{bind_middleware_params, bind_route_params};
pub use resolver::{Candidate, Resolution, resolve};
