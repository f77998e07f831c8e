use crate::matcher::{Candidate, Resolution, bind_middleware_params, bind_route_params, resolve};
use crate::path::{NormalizationOptions, RequestPath};
use crate::registry::{MiddlewareEntry, RouteEntry, RouteRegistry};
use crate::router::RouterOptions;
use crate::trie::RouteTrie;
use crate::types::{HttpMethod, MatchedMiddleware, RouteKey, RouteMatch};

use super::{ReadOnlyError, ReadOnlyResult};

/// Sealed, immutable view of a router. Lookups take `&self` and never lock.
#[derive(Debug)]
pub struct RouterReadOnly<H, M> {
    trie: RouteTrie,
    routes: Vec<RouteEntry<H>>,
    middlewares: Vec<MiddlewareEntry<M>>,
    normalization: NormalizationOptions,
    max_segments: usize,
    debug: bool,
}

impl<H, M> RouterReadOnly<H, M> {
    pub fn from_registry(mut registry: RouteRegistry<H, M>, options: &RouterOptions) -> Self {
        registry.finalize();
        let (trie, routes, middlewares) = registry.into_parts();

        Self {
            trie,
            routes,
            middlewares,
            normalization: options.normalization(),
            max_segments: options.max_segments,
            debug: options.debug,
        }
    }

    pub fn route(&self, key: RouteKey) -> Option<&RouteEntry<H>> {
        self.routes.get(key as usize)
    }

    pub fn routes(&self) -> &[RouteEntry<H>] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn middleware_count(&self) -> usize {
        self.middlewares.len()
    }

    pub fn tree(&self) -> &RouteTrie {
        &self.trie
    }

    fn not_found(method: HttpMethod, path: &str) -> ReadOnlyError {
        ReadOnlyError::RouteNotFound {
            method,
            path: path.to_string(),
        }
    }
}

impl<H: Clone, M: Clone> RouterReadOnly<H, M> {
    #[tracing::instrument(level = "trace", skip(self, method, path), fields(method = ?method, path = %path))]
    pub fn find(&self, method: HttpMethod, path: &str) -> ReadOnlyResult<RouteMatch<H, M>> {
        let Some(request) = RequestPath::parse(path, &self.normalization) else {
            return Err(Self::not_found(method, path));
        };
        if request.len() > self.max_segments {
            return Err(Self::not_found(method, request.as_str()));
        }

        match resolve(self.trie.root(), method, &request, self.debug) {
            Resolution::Found(candidate) => self.build_match(method, &request, candidate),
            Resolution::MethodNotAllowed(mask) => Err(ReadOnlyError::MethodNotAllowed {
                method,
                path: request.as_str().to_string(),
                allowed: HttpMethod::ALL
                    .into_iter()
                    .filter(|m| mask & (1 << m.index()) != 0)
                    .collect(),
            }),
            Resolution::NotFound => Err(Self::not_found(method, request.as_str())),
        }
    }

    fn build_match(
        &self,
        method: HttpMethod,
        request: &RequestPath,
        candidate: Candidate<'_>,
    ) -> ReadOnlyResult<RouteMatch<H, M>> {
        let entry = self
            .route(candidate.key)
            .ok_or_else(|| Self::not_found(method, request.as_str()))?;

        let middlewares = candidate
            .trail
            .iter()
            .flat_map(|node| node.middlewares().iter())
            .filter_map(|&key| self.middlewares.get(key as usize))
            .filter(|binding| binding.applies_to(method))
            .map(|binding| MatchedMiddleware {
                key: binding.key,
                middleware: binding.middleware.clone(),
                params: bind_middleware_params(&binding.prefix, request),
            })
            .collect();

        Ok(RouteMatch {
            key: entry.key,
            handler: entry.handler.clone(),
            pattern: entry.pattern.as_str().to_string(),
            priority: candidate.priority,
            params: bind_route_params(&entry.pattern, request, &candidate.captures),
            middlewares,
        })
    }
}
