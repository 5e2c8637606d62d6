use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Santiago;
use chrono_tz::Tz;

/// Source of "now" in the zone the vendor logs are written in.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

pub type ClockBox = Box<dyn Clock>;

/// Wall clock in `America/Santiago`, independent of the host's local zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SantiagoClock;

impl Clock for SantiagoClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&Santiago)
    }
}

/// A clock frozen at one instant. Handy for reproducible file names.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Tz>);

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self(instant)
    }

    /// Freezes the clock at the given Santiago wall time.
    ///
    /// Returns `None` when the wall time is skipped or repeated by a DST change.
    pub fn santiago(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        Santiago
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_santiago_clock_reports_santiago_zone() {
        let now = SantiagoClock.now();
        assert_eq!(now.timezone(), Santiago);
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::santiago(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().format("%d%m%Y %H%M%S").to_string(), "01012024 120000");
    }
}
