//! Prometheus projection of the decoded networkd state.

mod build_info;
mod collector;
mod projector;

pub use build_info::exporter_registry;
pub use collector::{MetricSource, NetworkdCollector};
pub use projector::{DEFAULT_NAMESPACE, MetricProjector};
