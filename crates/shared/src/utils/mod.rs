mod gracefullshutdown;
mod logs;
mod metrics;
mod otel;
mod service_tracer;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::{Telemetry, TracingContext};
pub use self::service_tracer::ServiceTracer;
