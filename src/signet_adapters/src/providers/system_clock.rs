use chrono::Utc;
use signet_core::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_time_after_2023() {
        // 2023-03-11T10:31:13Z
        assert!(SystemClock.millis() > 1678530673958);
    }
}
