mod body;
mod dates;
mod logs;
mod metrics;
mod number;
mod otel;
mod params;
mod shutdown;
mod validation;

pub use self::body::{BodyError, decode, decode_required, merge, parse_object, require_fields};
pub use self::dates::{DATE_FORMAT, format_date, parse_date, validate_date};
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::number::whole_float;
pub use self::otel::Telemetry;
pub use self::params::parse_id;
pub use self::shutdown::shutdown_signal;
pub use self::validation::first_violation;
