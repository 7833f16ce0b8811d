use async_trait::async_trait;
use prometheus::proto::MetricFamily;
use tracing::{debug, error, instrument, warn};

use super::MetricProjector;
use crate::{
    core::Result,
    services::{
        LeaseTranslator, NetworkdBus,
        networkd::decode::{BootClock, SystemBootClock},
    },
};

/// Something that produces a fresh set of metric families on every scrape.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Collects metrics for one scrape.
    ///
    /// Failures are logged by the source and surface as missing families.
    async fn scrape(&self) -> Vec<MetricFamily>;
}

/// Collects DHCP server metrics from systemd-networkd.
///
/// Holds no state between scrapes: every call re-fetches and re-decodes.
pub struct NetworkdCollector<B, C = SystemBootClock> {
    bus: B,
    clock: C,
    projector: MetricProjector,
}

impl<B: NetworkdBus> NetworkdCollector<B> {
    /// Creates a collector timing leases with the host's boottime clock.
    pub fn new(bus: B, projector: MetricProjector) -> Self {
        Self::with_clock(bus, SystemBootClock, projector)
    }
}

impl<B: NetworkdBus, C: BootClock> NetworkdCollector<B, C> {
    /// Creates a collector with an explicit clock source.
    pub fn with_clock(bus: B, clock: C, projector: MetricProjector) -> Self {
        Self {
            bus,
            clock,
            projector,
        }
    }

    /// Runs one full scrape: Describe, fallback reads, decoding, projection.
    ///
    /// Record-level decode problems are logged and do not fail the scrape.
    ///
    /// # Errors
    /// Returns the first bus, document, clock or metric error; nothing is
    /// emitted for a scrape that fails.
    pub async fn collect(&self) -> Result<Vec<MetricFamily>> {
        debug!("collecting systemd-networkd metrics");

        let translation = LeaseTranslator::new(&self.bus, &self.clock).fetch().await?;
        for warning in &translation.warnings {
            warn!(link = %warning.link, "{}", warning.warning);
        }

        for interface in &translation.interfaces {
            debug!("processing link: {}", interface.name);
        }

        Ok(self.projector.project(&translation.interfaces)?)
    }
}

#[async_trait]
impl<B: NetworkdBus, C: BootClock> MetricSource for NetworkdCollector<B, C> {
    #[instrument(skip(self))]
    async fn scrape(&self) -> Vec<MetricFamily> {
        match self.collect().await {
            Ok(families) => families,
            Err(err) => {
                error!("error getting systemd-networkd data via D-Bus: {}", err);
                Vec::new()
            }
        }
    }
}
