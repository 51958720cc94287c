use std::fmt;
use std::time::Duration;

/// Simulation speed: 0 is paused, 1 to 3 run increasingly fast
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const PAUSED: SpeedLevel = SpeedLevel(0);
    pub const MAX: SpeedLevel = SpeedLevel(3);

    /// Clamp any level into range
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX.0))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn is_paused(self) -> bool {
        self.0 == 0
    }

    /// One level faster, capped at the top speed
    pub fn faster(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One level slower, stopping at paused
    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Delay between generations: `base / level³`, or `None` while paused
    pub fn tick_interval(self, base: Duration) -> Option<Duration> {
        if self.is_paused() {
            return None;
        }
        let level = u32::from(self.0);
        Some(base / (level * level * level))
    }

    /// Get a string representation of the speed
    pub fn as_str(self) -> &'static str {
        match self.0 {
            0 => "Paused",
            1 => "Normal",
            2 => "Fast",
            _ => "Very Fast",
        }
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.as_str(), self.0, Self::MAX.0)
    }
}
