use crate::path::RequestPath;
use crate::pattern::{RoutePattern, Segment};
use crate::types::{ParamOffset, Params};

/// Pairs captured spans with the parameter names declared on the winning route.
pub(crate) fn bind_route_params(
    pattern: &RoutePattern,
    path: &RequestPath,
    captures: &[ParamOffset],
) -> Params {
    let mut params = Params::new();
    for (name, span) in pattern.param_names().iter().zip(captures) {
        params.push(name.clone(), path.slice(*span).to_string());
    }
    params
}

/// A middleware prefix lines up with the first components of the path, so
/// its own names are bound from the components at the same positions.
pub(crate) fn bind_middleware_params(prefix: &RoutePattern, path: &RequestPath) -> Params {
    let mut params = Params::new();
    for (idx, segment) in prefix.segments().iter().enumerate() {
        match segment {
            Segment::Static(_) => {}
            Segment::Param(name) => {
                params.push(name.clone(), path.component(idx).to_string());
            }
            Segment::Wildcard(name) => {
                params.push(name.clone(), path.slice(path.remainder_span(idx)).to_string());
            }
        }
    }
    params
}
