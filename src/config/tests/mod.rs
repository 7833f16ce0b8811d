//! Unit tests for config module
//!
//! Parses flag sets in memory; no environment variables are set.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{Config, LogFormat};

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    Config::try_parse_from(std::iter::once("networkd-exporter").chain(args.iter().copied()))
}

#[test]
fn config_defaults() {
    let config = parse(&[]).unwrap();

    assert_eq!(
        config.listen_address,
        "0.0.0.0:15694".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(config.dbus_address, None);
    assert_eq!(config.metrics_path, "/metrics");
    assert_eq!(config.namespace, "systemd_networkd");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn config_all_flags() {
    let config = parse(&[
        "--listen-address",
        "127.0.0.1:9100",
        "--dbus-addr",
        "unix:path=/run/dbus/system_bus_socket",
        "--metrics-path",
        "/networkd",
        "--namespace",
        "networkd",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(
        config.listen_address,
        "127.0.0.1:9100".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(
        config.dbus_address.as_deref(),
        Some("unix:path=/run/dbus/system_bus_socket")
    );
    assert_eq!(config.metrics_path, "/networkd");
    assert_eq!(config.namespace, "networkd");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn config_rejects_relative_metrics_path() {
    assert!(parse(&["--metrics-path", "metrics"]).is_err());
}

#[test]
fn config_rejects_bad_listen_address() {
    assert!(parse(&["--listen-address", ":15694"]).is_err());
}

#[test]
fn config_rejects_unknown_log_format() {
    assert!(parse(&["--log-format", "xml"]).is_err());
}

#[test]
fn log_format_display() {
    assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    assert_eq!(LogFormat::Json.to_string(), "json");
}
