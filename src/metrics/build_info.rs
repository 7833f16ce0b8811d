use prometheus::{Gauge, Opts, Registry};

/// Registry with the exporter's own metrics.
///
/// Holds a `<namespace>_exporter_build_info` gauge and, on Linux, the
/// standard process collector.
///
/// # Errors
/// Returns a prometheus error if registration fails.
pub fn exporter_registry(namespace: &str) -> Result<Registry, prometheus::Error> {
    let registry = Registry::new();

    let build_info = Gauge::with_opts(
        Opts::new(
            "exporter_build_info",
            "A metric with a constant '1' value labeled by the exporter version.",
        )
        .namespace(namespace)
        .const_label("version", env!("CARGO_PKG_VERSION")),
    )?;
    build_info.set(1.0);
    registry.register(Box::new(build_info))?;

    #[cfg(target_os = "linux")]
    registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    Ok(registry)
}
