use std::time::Duration;

/// Configuration for a recorder session.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Maximum active recording time in seconds. When the counter reaches
    /// this value the session auto-stops. Paused time does not count.
    pub max_duration_secs: u64,

    /// Countdown tick resolution (default: 1 second). Tests shorten this to
    /// run the timer at millisecond scale.
    pub timer_tick: Duration,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_duration_secs == 0 {
            return Err("max duration must be positive".into());
        }
        if self.timer_tick.is_zero() {
            return Err("timer tick must be positive".into());
        }
        Ok(())
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_duration_secs: 600,
            timer_tick: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RecorderConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_max_duration() {
        let config = RecorderConfig {
            max_duration_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_tick() {
        let config = RecorderConfig {
            timer_tick: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
