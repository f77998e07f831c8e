use crate::pattern::{RoutePattern, compile};
use crate::registry::RegistryMetrics;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::trie::{MAX_ROUTES, RouteTrie};
use crate::types::{HttpMethod, MiddlewareKey, RouteKey};

#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub key: RouteKey,
    pub method: HttpMethod,
    pub pattern: RoutePattern,
    pub handler: H,
}

#[derive(Debug, Clone)]
pub struct MiddlewareEntry<M> {
    pub key: MiddlewareKey,
    /// `None` applies the binding to every method.
    pub method: Option<HttpMethod>,
    pub prefix: RoutePattern,
    pub middleware: M,
}

impl<M> MiddlewareEntry<M> {
    pub fn applies_to(&self, method: HttpMethod) -> bool {
        self.method.is_none_or(|m| m == method)
    }
}

/// Owns the trie together with the descriptors its keys refer to.
#[derive(Debug)]
pub struct RouteRegistry<H, M> {
    trie: RouteTrie,
    routes: Vec<RouteEntry<H>>,
    middlewares: Vec<MiddlewareEntry<M>>,
    metrics: RegistryMetrics,
    max_segments: usize,
}

impl<H, M> RouteRegistry<H, M> {
    pub fn new(options: &RouterOptions) -> Self {
        Self {
            trie: RouteTrie::new(options.case_sensitive),
            routes: Vec::new(),
            middlewares: Vec::new(),
            metrics: RegistryMetrics::default(),
            max_segments: options.max_segments,
        }
    }

    pub fn insert(&mut self, method: HttpMethod, pattern: &str, handler: H) -> RouterResult<RouteKey> {
        let outcome = self.try_insert(method, pattern, handler);
        match &outcome {
            Ok(_) => self.metrics.record_route(),
            Err(_) => self.metrics.record_rejection(),
        }
        outcome
    }

    fn try_insert(&mut self, method: HttpMethod, pattern: &str, handler: H) -> RouterResult<RouteKey> {
        let compiled = self.compile_bounded(pattern)?;

        if self.routes.len() >= MAX_ROUTES as usize {
            return Err(RouterError::MaxRoutesExceeded { limit: MAX_ROUTES });
        }
        let key = self.routes.len() as RouteKey;

        self.trie.insert(method, &compiled, key)?;
        self.routes.push(RouteEntry {
            key,
            method,
            pattern: compiled,
            handler,
        });
        Ok(key)
    }

    pub fn insert_middleware(
        &mut self,
        method: Option<HttpMethod>,
        prefix: &str,
        middleware: M,
    ) -> RouterResult<MiddlewareKey> {
        let outcome = self.try_insert_middleware(method, prefix, middleware);
        match &outcome {
            Ok(_) => self.metrics.record_middleware(),
            Err(_) => self.metrics.record_rejection(),
        }
        outcome
    }

    fn try_insert_middleware(
        &mut self,
        method: Option<HttpMethod>,
        prefix: &str,
        middleware: M,
    ) -> RouterResult<MiddlewareKey> {
        let compiled = self.compile_bounded(prefix)?;
        let key = self.middlewares.len() as MiddlewareKey;

        self.trie.insert_middleware(&compiled, key)?;
        self.middlewares.push(MiddlewareEntry {
            key,
            method,
            prefix: compiled,
            middleware,
        });
        Ok(key)
    }

    fn compile_bounded(&self, pattern: &str) -> RouterResult<RoutePattern> {
        let compiled = compile(pattern)?;
        if compiled.len() > self.max_segments {
            return Err(RouterError::TooManySegments {
                pattern: pattern.to_string(),
                count: compiled.len(),
                limit: self.max_segments,
            });
        }
        Ok(compiled)
    }

    pub fn finalize(&mut self) {
        self.trie.seal();
    }

    pub fn into_parts(self) -> (RouteTrie, Vec<RouteEntry<H>>, Vec<MiddlewareEntry<M>>) {
        (self.trie, self.routes, self.middlewares)
    }

    pub fn tree(&self) -> &RouteTrie {
        &self.trie
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
