use std::net::IpAddr;

use prometheus::{GaugeVec, Opts, Registry, proto::MetricFamily};
use tracing::error;

use crate::services::{DhcpServer, Interface};

/// Namespace prefixed to every exported metric name.
pub const DEFAULT_NAMESPACE: &str = "systemd_networkd";

const LEASE_LABELS: &[&str] = &["interface", "ip_address", "client_id", "hostname"];
const STATIC_LEASE_LABELS: &[&str] = &["interface", "ip_address", "client_id"];

/// Projects decoded interfaces onto the exported metric families.
///
/// Every call builds its gauges from scratch, so samples never outlive the
/// scrape that produced them.
#[derive(Debug, Clone)]
pub struct MetricProjector {
    namespace: String,
}

impl Default for MetricProjector {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Gauges of one address family.
struct FamilyGauges {
    lease: GaugeVec,
    lease_expiration: GaugeVec,
    static_lease: GaugeVec,
}

impl MetricProjector {
    /// Creates a projector emitting metrics under `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Namespace prefixed to every metric name.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Emits one sample per configured server and per addressed lease.
    ///
    /// Leases without a decoded address are logged and skipped.
    ///
    /// # Errors
    /// Returns a prometheus error if a metric name or label set is invalid.
    pub fn project(&self, interfaces: &[Interface]) -> Result<Vec<MetricFamily>, prometheus::Error> {
        let registry = Registry::new();

        let configured = self.register(
            &registry,
            "dhcpserver_configured",
            "Set to 1 if a DHCP Server is configured for the interface.",
            &["interface", "pool_size", "pool_offset"],
        )?;
        let ipv4 = self.register_family(&registry, "ipv4", "IPv4")?;
        let ipv6 = self.register_family(&registry, "ipv6", "IPv6")?;

        for interface in interfaces {
            let Some(server) = &interface.dhcp_server else {
                continue;
            };

            let pool_size = optional_label(server.pool_size);
            let pool_offset = optional_label(server.pool_offset);
            configured
                .get_metric_with_label_values(&[
                    interface.name.as_str(),
                    pool_size.as_str(),
                    pool_offset.as_str(),
                ])?
                .set(1.0);

            project_server(&interface.name, server, &ipv4, &ipv6)?;
        }

        Ok(registry.gather())
    }

    fn register_family(
        &self,
        registry: &Registry,
        family: &str,
        display: &str,
    ) -> Result<FamilyGauges, prometheus::Error> {
        Ok(FamilyGauges {
            lease: self.register(
                registry,
                &format!("dhcpserver_{family}_lease"),
                &format!("Current {display} DHCP Leases offered by the DHCP Server."),
                LEASE_LABELS,
            )?,
            lease_expiration: self.register(
                registry,
                &format!("dhcpserver_{family}_lease_expiration_time"),
                "UNIX timestamp (in seconds) at which point the lease expires.",
                LEASE_LABELS,
            )?,
            static_lease: self.register(
                registry,
                &format!("dhcpserver_{family}_static_lease"),
                &format!("Static {display} DHCP Leases offered by the DHCP Server."),
                STATIC_LEASE_LABELS,
            )?,
        })
    }

    fn register(
        &self,
        registry: &Registry,
        name: &str,
        help: &str,
        labels: &[&str],
    ) -> Result<GaugeVec, prometheus::Error> {
        let gauge = GaugeVec::new(Opts::new(name, help).namespace(self.namespace.as_str()), labels)?;
        registry.register(Box::new(gauge.clone()))?;
        Ok(gauge)
    }
}

fn project_server(
    interface: &str,
    server: &DhcpServer,
    ipv4: &FamilyGauges,
    ipv6: &FamilyGauges,
) -> Result<(), prometheus::Error> {
    for lease in &server.leases {
        let Some(address) = lease.address else {
            error!("skipped exporting lease {:?} since it had no address", lease);
            continue;
        };

        let gauges = gauges_for(address, ipv4, ipv6);
        let ip_address = address.to_string();
        let labels = [
            interface,
            ip_address.as_str(),
            lease.client_id.as_str(),
            lease.hostname.as_str(),
        ];

        gauges.lease.get_metric_with_label_values(&labels)?.set(1.0);
        gauges
            .lease_expiration
            .get_metric_with_label_values(&labels)?
            .set(lease.expiration.timestamp() as f64);
    }

    for lease in &server.static_leases {
        let Some(address) = lease.address else {
            error!("skipped exporting static lease {:?} since it had no address", lease);
            continue;
        };

        let ip_address = address.to_string();
        gauges_for(address, ipv4, ipv6)
            .static_lease
            .get_metric_with_label_values(&[
                interface,
                ip_address.as_str(),
                lease.client_id.as_str(),
            ])?
            .set(1.0);
    }

    Ok(())
}

fn gauges_for<'a>(address: IpAddr, ipv4: &'a FamilyGauges, ipv6: &'a FamilyGauges) -> &'a FamilyGauges {
    match address {
        IpAddr::V4(_) => ipv4,
        IpAddr::V6(_) => ipv6,
    }
}

fn optional_label(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
