//! Normalizes networkd lease data into the [`Interface`] domain model.
//!
//! Each described link is decoded from exactly one source: the Describe
//! document when it carries a `DHCPServer` object, the per-link
//! `DHCPServer.Leases` property otherwise. Older networkd releases only
//! offer the latter.

use std::{collections::HashMap, net::IpAddr};

use tracing::debug;

use super::{
    DecodeWarning, DescribeDocument, DescribedDhcpServer, DescribedInterface, DescribedLease,
    DescribedStaticLease, DhcpServer, Interface, Lease, NativeLink, NetworkdBus, NetworkdError,
    RawLease, StaticLease,
    decode::{BootClock, ClockReading, decode_address, decode_client_id, decode_native_address},
};

/// A decode warning and the link it was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWarning {
    /// Name of the link the record belongs to.
    pub link: String,
    /// What went wrong.
    pub warning: DecodeWarning,
}

/// Result of one translation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// Decoded links, in Describe document order.
    pub interfaces: Vec<Interface>,
    /// Per-record problems; the affected records have no address.
    pub warnings: Vec<LinkWarning>,
}

/// Whether a described link carries its own DHCP server detail.
///
/// Links without it have to be read through the native per-link call.
pub fn has_server_detail(entry: &DescribedInterface) -> bool {
    entry.dhcp_server.is_some()
}

/// Turns networkd's raw lease records into [`Interface`]s.
pub struct LeaseTranslator<'a, B: ?Sized, C: ?Sized> {
    bus: &'a B,
    clock: &'a C,
}

impl<'a, B, C> LeaseTranslator<'a, B, C>
where
    B: NetworkdBus + ?Sized,
    C: BootClock + ?Sized,
{
    /// Creates a translator reading from `bus` and timing with `clock`.
    pub fn new(bus: &'a B, clock: &'a C) -> Self {
        Self { bus, clock }
    }

    /// Fetches the Describe document and translates it.
    ///
    /// # Errors
    /// Returns the bus, document or clock error that aborted the pass.
    pub async fn fetch(&self) -> Result<Translation, NetworkdError> {
        let document = self.bus.describe().await?;
        self.translate(document).await
    }

    /// Translates an already fetched Describe document.
    ///
    /// Falls back to `ListLinks` plus per-link lease reads for links without
    /// server detail. Record-level problems end up in
    /// [`Translation::warnings`].
    ///
    /// # Errors
    /// Returns the error of a failed `ListLinks` call or clock read.
    pub async fn translate(&self, document: DescribeDocument) -> Result<Translation, NetworkdError> {
        let clock = self.clock.read()?;
        let needs_native = document.interfaces.iter().any(|entry| !has_server_detail(entry));
        let native_links = if needs_native {
            self.bus.list_links().await?
        } else {
            HashMap::new()
        };

        let mut warnings = Vec::new();
        let mut interfaces = Vec::with_capacity(document.interfaces.len());

        for entry in document.interfaces {
            let mut sink = LinkSink::new(&entry.name, &mut warnings);
            let dhcp_server = match entry.dhcp_server {
                Some(server) => Some(decode_described_server(server, &clock, &mut sink)),
                None => {
                    self.native_server(entry.index, &native_links, &clock, &mut sink)
                        .await
                }
            };

            interfaces.push(Interface {
                name: entry.name,
                index: entry.index,
                dhcp_server,
            });
        }

        Ok(Translation {
            interfaces,
            warnings,
        })
    }

    async fn native_server(
        &self,
        index: i32,
        native_links: &HashMap<i32, NativeLink>,
        clock: &ClockReading,
        sink: &mut LinkSink<'_>,
    ) -> Option<DhcpServer> {
        let Some(link) = native_links.get(&index) else {
            sink.push(DecodeWarning::UnknownLink { index });
            return None;
        };

        let raw_leases = self.bus.link_leases(link).await;
        if raw_leases.is_empty() {
            debug!("link {} reported no native leases", link.name);
            return None;
        }

        Some(DhcpServer {
            leases: raw_leases
                .iter()
                .map(|raw| decode_native_lease(raw, clock, sink))
                .collect(),
            ..DhcpServer::default()
        })
    }
}

struct LinkSink<'a> {
    link: &'a str,
    warnings: &'a mut Vec<LinkWarning>,
}

impl<'a> LinkSink<'a> {
    fn new(link: &'a str, warnings: &'a mut Vec<LinkWarning>) -> Self {
        Self { link, warnings }
    }

    fn push(&mut self, warning: DecodeWarning) {
        self.warnings.push(LinkWarning {
            link: self.link.to_string(),
            warning,
        });
    }

    fn keep<T>(&mut self, decoded: Result<T, DecodeWarning>) -> Option<T> {
        decoded.map_err(|warning| self.push(warning)).ok()
    }
}

fn decode_described_server(
    server: DescribedDhcpServer,
    clock: &ClockReading,
    sink: &mut LinkSink<'_>,
) -> DhcpServer {
    DhcpServer {
        pool_size: server.pool_size,
        pool_offset: server.pool_offset,
        leases: server
            .leases
            .into_iter()
            .map(|raw| decode_described_lease(raw, clock, sink))
            .collect(),
        static_leases: server
            .static_leases
            .into_iter()
            .map(|raw| decode_static_lease(raw, sink))
            .collect(),
    }
}

fn decode_described_lease(
    raw: DescribedLease,
    clock: &ClockReading,
    sink: &mut LinkSink<'_>,
) -> Lease {
    let (client_id, address) = decode_identity(&raw.client_id, decode_address(&raw.address), sink);

    Lease {
        client_id,
        address,
        hostname: raw.hostname,
        expiration: clock.to_wall_clock(raw.expiration_usec),
    }
}

fn decode_static_lease(raw: DescribedStaticLease, sink: &mut LinkSink<'_>) -> StaticLease {
    let (client_id, address) = decode_identity(&raw.client_id, decode_address(&raw.address), sink);

    StaticLease { client_id, address }
}

fn decode_native_lease(raw: &RawLease, clock: &ClockReading, sink: &mut LinkSink<'_>) -> Lease {
    let (client_id, address) = decode_identity(
        &raw.client_id,
        decode_native_address(raw.family, &raw.address),
        sink,
    );

    Lease {
        client_id,
        address,
        hostname: String::new(),
        expiration: clock.to_wall_clock(raw.expiration_usec),
    }
}

/// A record whose client id cannot be decoded loses its address too, so it
/// is never exported under a made-up identifier.
fn decode_identity(
    raw_client_id: &[u8],
    address: Result<IpAddr, DecodeWarning>,
    sink: &mut LinkSink<'_>,
) -> (String, Option<IpAddr>) {
    let address = sink.keep(address);

    match sink.keep(decode_client_id(raw_client_id)) {
        Some(client_id) => (client_id, address),
        None => (String::new(), None),
    }
}
