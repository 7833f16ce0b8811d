//! Unit tests for lease translation
//!
//! Drives the translator through an in-memory bus and a fixed clock.

#![allow(clippy::unwrap_used, clippy::panic)]


use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use zbus::zvariant::OwnedObjectPath;

use super::{
    DescribeDocument, NativeLink, NetworkdBus, NetworkdError, RawLease,
    decode::{BootClock, ClockReading},
};

pub(super) const WALL_SECS: i64 = 1_700_000_000;
pub(super) const BOOTTIME_USEC: u64 = 10_000_000;

pub(super) struct FixedClock;

impl BootClock for FixedClock {
    fn read(&self) -> Result<ClockReading, NetworkdError> {
        Ok(ClockReading {
            wall: DateTime::<Utc>::from_timestamp(WALL_SECS, 0).unwrap(),
            boottime_usec: BOOTTIME_USEC,
        })
    }
}

#[derive(Default)]
pub(super) struct FakeBus {
    pub document: DescribeDocument,
    pub links: Vec<(i32, &'static str)>,
    pub leases: HashMap<i32, Vec<RawLease>>,
    pub fail_list_links: bool,
    pub list_links_calls: AtomicUsize,
}

impl FakeBus {
    pub fn list_links_calls(&self) -> usize {
        self.list_links_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkdBus for FakeBus {
    async fn list_links(&self) -> Result<HashMap<i32, NativeLink>, NetworkdError> {
        self.list_links_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_links {
            return Err(zbus::Error::Failure("connection lost".to_string()).into());
        }

        Ok(self
            .links
            .iter()
            .map(|&(index, name)| {
                let path =
                    OwnedObjectPath::try_from(format!("/org/freedesktop/network1/link/_3{index}"))
                        .unwrap();
                (
                    index,
                    NativeLink {
                        index,
                        name: name.to_string(),
                        path,
                    },
                )
            })
            .collect())
    }

    async fn link_leases(&self, link: &NativeLink) -> Vec<RawLease> {
        self.leases.get(&link.index).cloned().unwrap_or_default()
    }

    async fn describe(&self) -> Result<DescribeDocument, NetworkdError> {
        Ok(self.document.clone())
    }
}
