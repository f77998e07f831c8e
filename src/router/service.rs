use crate::readonly::RouterReadOnly;
use crate::registry::{RegistryMetrics, RouteRegistry};
use crate::router::{RouterError, RouterOptions, RouterOptionsError, RouterResult};
use crate::types::{HttpMethod, MiddlewareKey, RouteKey, RouteMatch};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
struct RouterState<H, M> {
    options: RouterOptions,
    // taken by seal()
    registry: Option<RouteRegistry<H, M>>,
    metrics: RegistryMetrics,
    readonly: OnceLock<Arc<RouterReadOnly<H, M>>>,
}

impl<H, M> RouterState<H, M> {
    fn new(options: RouterOptions) -> Self {
        Self {
            registry: Some(RouteRegistry::new(&options)),
            options,
            metrics: RegistryMetrics::default(),
            readonly: OnceLock::new(),
        }
    }

    fn registry_mut(&mut self) -> Option<&mut RouteRegistry<H, M>> {
        if self.readonly.get().is_some() {
            return None;
        }
        self.registry.as_mut()
    }
}

/// Build-phase router. Routes and middleware are registered through `&self`,
/// then `seal()` publishes an immutable [`RouterReadOnly`] for serving.
#[derive(Debug)]
pub struct Router<H, M = H> {
    inner: RwLock<RouterState<H, M>>,
}

impl<H, M> Router<H, M> {
    /// Invalid options are replaced by the defaults with a warning; use
    /// [`Router::try_new`] to reject them instead.
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        let options = match options.validate() {
            Ok(()) => options,
            Err(err) => {
                tracing::warn!(error = %err, "invalid router options; falling back to defaults");
                RouterOptions::default()
            }
        };
        Self::with_state(RouterState::new(options))
    }

    pub fn try_new(options: Option<RouterOptions>) -> Result<Self, RouterOptionsError> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self::with_state(RouterState::new(options)))
    }

    fn with_state(state: RouterState<H, M>) -> Self {
        Self {
            inner: RwLock::new(state),
        }
    }

    pub fn add(&self, method: HttpMethod, pattern: &str, handler: H) -> RouterResult<RouteKey> {
        let mut guard = self.inner.write();

        match guard.registry_mut() {
            Some(registry) => registry.insert(method, pattern, handler),
            None => Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            }),
        }
    }

    /// Registers every entry in order, stopping at the first failure.
    pub fn add_bulk<I, S>(&self, entries: I) -> RouterResult<Vec<RouteKey>>
    where
        I: IntoIterator<Item = (HttpMethod, S, H)>,
        S: AsRef<str>,
    {
        let mut guard = self.inner.write();

        let Some(registry) = guard.registry_mut() else {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        };

        entries
            .into_iter()
            .map(|(method, pattern, handler)| registry.insert(method, pattern.as_ref(), handler))
            .collect()
    }

    /// Binds `middleware` to every route matched through `prefix`, for any method.
    pub fn add_middleware(&self, prefix: &str, middleware: M) -> RouterResult<MiddlewareKey> {
        self.insert_middleware(None, prefix, middleware)
    }

    /// Like [`Router::add_middleware`] but only for requests using `method`.
    pub fn add_method_middleware(
        &self,
        method: HttpMethod,
        prefix: &str,
        middleware: M,
    ) -> RouterResult<MiddlewareKey> {
        self.insert_middleware(Some(method), prefix, middleware)
    }

    fn insert_middleware(
        &self,
        method: Option<HttpMethod>,
        prefix: &str,
        middleware: M,
    ) -> RouterResult<MiddlewareKey> {
        let mut guard = self.inner.write();

        match guard.registry_mut() {
            Some(registry) => registry.insert_middleware(method, prefix, middleware),
            None => Err(RouterError::AddWhileSealed {
                pattern: prefix.to_string(),
            }),
        }
    }

    /// Ends the build phase. Calling it again has no effect.
    pub fn seal(&self) {
        let mut guard = self.inner.write();

        let Some(registry) = guard.registry.take() else {
            return;
        };
        guard.metrics = registry.metrics().clone();
        let snapshot = RouterReadOnly::from_registry(registry, &guard.options);
        let _ = guard.readonly.set(Arc::new(snapshot));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<H, M>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    pub fn stats(&self) -> RegistryMetrics {
        let guard = self.inner.read();

        match guard.registry.as_ref() {
            Some(registry) => registry.metrics().clone(),
            None => guard.metrics.clone(),
        }
    }
}

impl<H: Clone, M: Clone> Router<H, M> {
    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<RouteMatch<H, M>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => ro.find(method, path).map_err(RouterError::from),
            None => Err(RouterError::FindWhileMutable),
        }
    }
}
