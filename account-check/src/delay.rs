use crate::error::{AccountCheckError, Result};
use crate::traits::DelayPolicy;
use rand::Rng;
use std::time::Duration;

/// Pause drawn uniformly from `[min, max]` before each lookup
#[derive(Debug, Clone, Copy)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        if min > max {
            return Err(AccountCheckError::invalid_config(format!(
                "delay lower bound {:?} is greater than upper bound {:?}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// 1.0–2.0 seconds, used by the file-driven batch
    pub fn batch_default() -> Self {
        Self {
            min: Duration::from_millis(1_000),
            max: Duration::from_millis(2_000),
        }
    }

    /// 0.5–1.0 seconds, used by the multi-check HTTP endpoint
    pub fn server_default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(1_000),
        }
    }

    pub fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }
}

impl DelayPolicy for UniformDelay {
    fn next_delay(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let secs = rand::thread_rng().gen_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

/// Constant pause
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl DelayPolicy for FixedDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayPolicy for NoDelay {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
