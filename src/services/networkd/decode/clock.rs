use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use nix::time::{ClockId, clock_gettime};

use crate::services::networkd::NetworkdError;

/// Wall-clock and CLOCK_BOOTTIME read back to back.
///
/// networkd stamps lease expirations in boottime microseconds; one reading
/// is enough to place any number of them on the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Wall-clock time of the reading.
    pub wall: DateTime<Utc>,
    /// CLOCK_BOOTTIME of the reading, in microseconds.
    pub boottime_usec: u64,
}

impl ClockReading {
    /// Converts a CLOCK_BOOTTIME microsecond timestamp to wall-clock time.
    ///
    /// Saturates at the representable range instead of overflowing.
    pub fn to_wall_clock(&self, boottime_usec: u64) -> DateTime<Utc> {
        let delta = i128::from(boottime_usec) - i128::from(self.boottime_usec);
        let delta = i64::try_from(delta).unwrap_or(if delta > 0 { i64::MAX } else { i64::MIN });

        self.wall
            .checked_add_signed(TimeDelta::microseconds(delta))
            .unwrap_or(if delta > 0 {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            })
    }
}

/// Source of [`ClockReading`]s.
pub trait BootClock: Send + Sync {
    /// Reads both clocks.
    ///
    /// # Errors
    /// Returns [`NetworkdError::Clock`] if the boottime clock cannot be read.
    fn read(&self) -> Result<ClockReading, NetworkdError>;
}

/// Reads the host's CLOCK_BOOTTIME and system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBootClock;

impl BootClock for SystemBootClock {
    fn read(&self) -> Result<ClockReading, NetworkdError> {
        let boottime = Duration::from(clock_gettime(ClockId::CLOCK_BOOTTIME)?);
        let wall = Utc::now();

        Ok(ClockReading {
            wall,
            boottime_usec: u64::try_from(boottime.as_micros()).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reading() -> ClockReading {
        ClockReading {
            wall: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            boottime_usec: 5_000_000,
        }
    }

    #[test]
    fn future_boottime_lands_after_now() {
        let expiration = reading().to_wall_clock(8_500_000);

        assert_eq!(expiration.timestamp(), 1_700_000_003);
        assert_eq!(expiration.timestamp_subsec_micros(), 500_000);
    }

    #[test]
    fn past_boottime_lands_before_now() {
        let expiration = reading().to_wall_clock(1_000_000);

        assert_eq!(expiration.timestamp(), 1_699_999_996);
    }

    #[test]
    fn current_boottime_is_now() {
        let clock = reading();

        assert_eq!(clock.to_wall_clock(clock.boottime_usec), clock.wall);
    }

    #[test]
    fn infinite_expiration_saturates() {
        assert_eq!(reading().to_wall_clock(u64::MAX), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn system_clock_reads_boottime() {
        let first = SystemBootClock.read().unwrap();
        let second = SystemBootClock.read().unwrap();

        assert!(second.boottime_usec >= first.boottime_usec);
        assert!(first.boottime_usec > 0);
    }
}
