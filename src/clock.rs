use chrono::{DateTime, Utc};

/// An injectable time source.
///
/// Every timestamp a signer emits is read from a `Clock`, normalized to
/// UTC. [`Clock::fixed`] pins the time for deterministic output.
#[derive(Clone, Debug)]
pub struct Clock(ClockInner);

impl Clock {
    /// Returns a clock that reads the system time.
    pub fn system() -> Self {
        Self(ClockInner::System)
    }

    /// Returns a clock that always reports the given instant.
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self(ClockInner::Fixed(now))
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        match self.0 {
            ClockInner::System => Utc::now(),
            ClockInner::Fixed(now) => now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

#[derive(Clone, Copy, Debug)]
enum ClockInner {
    System,
    Fixed(DateTime<Utc>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() -> anyhow::Result<()> {
        let now = DateTime::parse_from_rfc3339("2020-01-02T03:04:05Z")?.with_timezone(&Utc);
        let clock = Clock::fixed(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.now(), clock.now());
        Ok(())
    }

    #[test]
    fn test_fixed_normalizes_offset_to_utc() -> anyhow::Result<()> {
        let local = DateTime::parse_from_rfc3339("2020-01-02T12:04:05+09:00")?;
        let clock = Clock::fixed(local.with_timezone(&Utc));
        assert_eq!(clock.now().to_rfc3339(), "2020-01-02T03:04:05+00:00");
        Ok(())
    }

    #[test]
    fn test_default_is_system() {
        let clock = Clock::default();
        assert!(clock.now().timestamp() > 0);
    }
}
