use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Metrics,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Wires every service onto the pool and starts the process metrics
    /// collector. Must run inside a tokio runtime.
    pub fn new(pool: ConnectionPool) -> Self {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        let system_metrics = Arc::new(SystemMetrics::new());

        metrics.register(&mut registry);
        system_metrics.register(&mut registry);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Self {
            di_container: DependenciesInject::new(pool),
            registry: Arc::new(registry),
            metrics,
            system_metrics,
        }
    }
}
