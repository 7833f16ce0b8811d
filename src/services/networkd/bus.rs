use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use zbus::{Connection, proxy::CacheProperties};

use super::{
    DHCPServerProxy, DescribeDocument, ManagerProxy, NativeLink, NetworkdError, RawLease,
};

/// Calls the exporter makes against systemd-networkd.
#[async_trait]
pub trait NetworkdBus: Send + Sync {
    /// Enumerates all links, keyed by interface index.
    ///
    /// # Errors
    /// Returns [`NetworkdError::Transport`] if the bus call fails.
    async fn list_links(&self) -> Result<HashMap<i32, NativeLink>, NetworkdError>;

    /// Reads the native lease records of one link.
    ///
    /// A link without a DHCP server and a failed property read look the same
    /// on the bus, so both yield an empty list.
    async fn link_leases(&self, link: &NativeLink) -> Vec<RawLease>;

    /// Fetches and parses the aggregate Describe document.
    ///
    /// # Errors
    /// Returns [`NetworkdError::Transport`] if the bus call fails and
    /// [`NetworkdError::DocumentDecode`] if the reply is not a valid document.
    async fn describe(&self) -> Result<DescribeDocument, NetworkdError>;
}

/// [`NetworkdBus`] over a shared D-Bus connection.
#[derive(Debug, Clone)]
pub struct NetworkdClient {
    connection: Connection,
}

impl NetworkdClient {
    /// Wraps an established connection to the bus networkd is on.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Connects to the D-Bus daemon at `address`, or to the system bus.
    ///
    /// # Errors
    /// Returns the zbus error if the address is invalid or the connection
    /// cannot be established.
    pub async fn connect(address: Option<&str>) -> zbus::Result<Self> {
        let connection = match address {
            Some(address) => {
                info!("connecting to dbus daemon at {}", address);
                zbus::connection::Builder::address(address)?.build().await?
            }
            None => {
                info!("connecting to the system dbus daemon");
                Connection::system().await?
            }
        };

        Ok(Self::new(connection))
    }

    async fn manager(&self) -> Result<ManagerProxy<'_>, NetworkdError> {
        Ok(ManagerProxy::new(&self.connection).await?)
    }

    async fn dhcp_server(&self, link: &NativeLink) -> zbus::Result<DHCPServerProxy<'_>> {
        DHCPServerProxy::builder(&self.connection)
            .path(link.path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }
}

#[async_trait]
impl NetworkdBus for NetworkdClient {
    #[instrument(skip(self))]
    async fn list_links(&self) -> Result<HashMap<i32, NativeLink>, NetworkdError> {
        let links = self.manager().await?.list_links().await?;

        Ok(links
            .into_iter()
            .map(NativeLink::from)
            .map(|link| (link.index, link))
            .collect())
    }

    #[instrument(skip(self), fields(link = %link.name))]
    async fn link_leases(&self, link: &NativeLink) -> Vec<RawLease> {
        let leases = match self.dhcp_server(link).await {
            Ok(proxy) => proxy.leases().await,
            Err(err) => Err(err),
        };

        match leases {
            Ok(leases) => leases.into_iter().map(RawLease::from).collect(),
            Err(err) => {
                debug!("No DHCPServer leases readable for {}: {}", link.name, err);
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn describe(&self) -> Result<DescribeDocument, NetworkdError> {
        let text = self.manager().await?.describe().await?;
        Ok(DescribeDocument::from_json(&text)?)
    }
}
