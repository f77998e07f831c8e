#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub total_middlewares_registered: usize,
    pub rejected_registrations: usize,
}

impl RegistryMetrics {
    pub fn record_route(&mut self) {
        self.total_routes_registered += 1;
    }

    pub fn record_middleware(&mut self) {
        self.total_middlewares_registered += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected_registrations += 1;
    }
}
