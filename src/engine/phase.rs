//! Timer phases and their configured durations.

use serde::{Deserialize, Serialize};

/// Minimum valid phase duration in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Maximum valid phase duration in minutes.
pub const MAX_MINUTES: u32 = 60;

/// One of the three Pomodoro countdown modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work (default 25 minutes)
    Work,
    /// Short break (default 5 minutes)
    ShortBreak,
    /// Long break (default 15 minutes)
    LongBreak,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// All phases, in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Work, Self::ShortBreak, Self::LongBreak]
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Validated per-phase durations in whole minutes.
///
/// Values are always within `MIN_MINUTES..=MAX_MINUTES`; construction clamps
/// out-of-range input to the nearest bound rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Work phase duration in minutes.
    pub work: u32,
    /// Short break duration in minutes.
    pub short_break: u32,
    /// Long break duration in minutes.
    pub long_break: u32,
}

impl Durations {
    /// Create durations from raw minute values, clamping each into the
    /// valid range.
    #[must_use]
    pub fn from_minutes(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work: work.clamp(MIN_MINUTES, MAX_MINUTES),
            short_break: short_break.clamp(MIN_MINUTES, MAX_MINUTES),
            long_break: long_break.clamp(MIN_MINUTES, MAX_MINUTES),
        }
    }

    /// Get the configured duration for a phase, in minutes.
    #[must_use]
    pub const fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    /// Get the configured duration for a phase, in seconds.
    #[must_use]
    pub const fn seconds_for(&self, phase: Phase) -> u32 {
        self.minutes_for(phase) * 60
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let d = Durations::default();
        assert_eq!(d.work, 25);
        assert_eq!(d.short_break, 5);
        assert_eq!(d.long_break, 15);
    }

    #[test]
    fn test_from_minutes_clamps_to_bounds() {
        let d = Durations::from_minutes(0, 5, 999);
        assert_eq!(d.work, MIN_MINUTES);
        assert_eq!(d.short_break, 5);
        assert_eq!(d.long_break, MAX_MINUTES);
    }

    #[test]
    fn test_seconds_for_phase() {
        let d = Durations::default();
        assert_eq!(d.seconds_for(Phase::Work), 25 * 60);
        assert_eq!(d.seconds_for(Phase::ShortBreak), 5 * 60);
        assert_eq!(d.seconds_for(Phase::LongBreak), 15 * 60);
    }

    #[test]
    fn test_phase_is_break() {
        assert!(!Phase::Work.is_break());
        assert!(Phase::ShortBreak.is_break());
        assert!(Phase::LongBreak.is_break());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Work.to_string(), "Work");
        assert_eq!(Phase::ShortBreak.to_string(), "Short Break");
        assert_eq!(Phase::LongBreak.to_string(), "Long Break");
    }
}
