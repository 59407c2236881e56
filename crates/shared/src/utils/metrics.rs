use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessesToUpdate, System};

const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Process and host gauges, refreshed by [`run_metrics_collector`].
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    resident_memory: Gauge,
    virtual_memory: Gauge,
    available_memory: Gauge,
    cpu_usage: Gauge,
    start_time: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        metrics.start_time.set(started);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        let process = registry.sub_registry_with_prefix("process");
        process.register(
            "resident_memory_bytes",
            "Resident memory of the service",
            self.resident_memory.clone(),
        );
        process.register(
            "virtual_memory_bytes",
            "Virtual memory of the service",
            self.virtual_memory.clone(),
        );
        process.register(
            "start_time_seconds",
            "Start time of the service since unix epoch",
            self.start_time.clone(),
        );

        let host = registry.sub_registry_with_prefix("system");
        host.register(
            "available_memory_bytes",
            "Memory available to new allocations on the host",
            self.available_memory.clone(),
        );
        host.register(
            "cpu_usage_percent",
            "Global cpu usage of the host",
            self.cpu_usage.clone(),
        );
    }

    fn refresh(&self, sys: &mut System) {
        let pid = Pid::from_u32(std::process::id());

        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        self.available_memory.set(sys.available_memory() as i64);
        self.cpu_usage.set(sys.global_cpu_usage() as i64);

        if let Some(process) = sys.process(pid) {
            self.resident_memory.set(process.memory() as i64);
            self.virtual_memory.set(process.virtual_memory() as i64);
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Other,
}

impl From<&axum::http::Method> for Method {
    fn from(method: &axum::http::Method) -> Self {
        match *method {
            axum::http::Method::GET => Method::Get,
            axum::http::Method::POST => Method::Post,
            axum::http::Method::PUT => Method::Put,
            axum::http::Method::PATCH => Method::Patch,
            axum::http::Method::DELETE => Method::Delete,
            _ => Method::Other,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    ClientError,
    ServerError,
}

impl From<axum::http::StatusCode> for Status {
    fn from(status: axum::http::StatusCode) -> Self {
        if status.is_server_error() {
            Status::ServerError
        } else if status.is_client_error() {
            Status::ClientError
        } else {
            Status::Success
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "http_requests",
            "Total HTTP requests by method and outcome",
            self.request_counter.clone(),
        );
        registry.register(
            "http_request_duration_seconds",
            "HTTP request latency by method and outcome",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut sys = System::new();
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);

    loop {
        interval.tick().await;
        system_metrics.refresh(&mut sys);
    }
}
