//! systemd-networkd main D-Bus interface.

use zbus::{proxy, zvariant::OwnedObjectPath};

/// Network Manager.
///
/// The top-level networkd object, used to enumerate links and to fetch the
/// aggregate JSON description of all of them.
#[proxy(
    default_service = "org.freedesktop.network1",
    interface = "org.freedesktop.network1.Manager",
    default_path = "/org/freedesktop/network1"
)]
pub trait Manager {
    /// List all links known to networkd.
    ///
    /// # Returns
    /// One `(index, name, object path)` entry per link.
    fn list_links(&self) -> zbus::Result<Vec<(i32, String, OwnedObjectPath)>>;

    /// Describe the manager state and all links as a JSON document.
    fn describe(&self) -> zbus::Result<String>;
}
