//! Daily attempt allowance.
//!
//! Each variant (daily puzzle mode) gets a fixed number of free attempts
//! per UTC day plus a bounded number of bonus attempts that must be
//! granted first. All counters reset when the day changes.

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;

/// Free attempts per variant per day.
pub const DEFAULT_FREE_PER_DAY: u32 = 3;

/// Bonus attempts that may be granted per variant per day.
pub const DEFAULT_BONUS_CAP: u32 = 2;

/// UTC day number, counted from the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(pub u64);

impl DayKey {
    /// Day containing `time`. Times before the epoch map to day 0.
    #[must_use]
    pub fn from_system_time(time: SystemTime) -> Self {
        let secs = time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
        Self(secs / SECONDS_PER_DAY)
    }

    /// Today, by the wall clock.
    #[must_use]
    pub fn today() -> Self {
        Self::from_system_time(SystemTime::now())
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day({})", self.0)
    }
}

/// Counters for one variant on one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttempts {
    pub free_used: u32,
    pub bonus_granted: u32,
    pub bonus_used: u32,
}

/// Per-variant attempt counters for the current UTC day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttempts {
    day: DayKey,
    free_per_day: u32,
    bonus_cap: u32,
    variants: FxHashMap<String, VariantAttempts>,
}

impl Default for DailyAttempts {
    fn default() -> Self {
        Self::new(DayKey::default(), DEFAULT_FREE_PER_DAY, DEFAULT_BONUS_CAP)
    }
}

impl DailyAttempts {
    #[must_use]
    pub fn new(day: DayKey, free_per_day: u32, bonus_cap: u32) -> Self {
        Self {
            day,
            free_per_day,
            bonus_cap,
            variants: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn day(&self) -> DayKey {
        self.day
    }

    #[must_use]
    pub fn variant(&self, variant: &str) -> VariantAttempts {
        self.variants.get(variant).copied().unwrap_or_default()
    }

    /// Reset every counter if `today` is not the stored day.
    ///
    /// Returns whether a reset happened.
    pub fn roll_over(&mut self, today: DayKey) -> bool {
        if self.day == today {
            return false;
        }
        tracing::debug!(from = %self.day, to = %today, "daily attempts reset");
        self.day = today;
        self.variants.clear();
        true
    }

    /// Attempts still available today (free plus granted bonus).
    #[must_use]
    pub fn remaining(&self, variant: &str) -> u32 {
        let used = self.variant(variant);
        let free = self.free_per_day.saturating_sub(used.free_used);
        let bonus = used.bonus_granted.saturating_sub(used.bonus_used);
        free + bonus
    }

    /// Spend one attempt, free ones first. `false` if none are left.
    pub fn try_consume(&mut self, variant: &str) -> bool {
        let free_per_day = self.free_per_day;
        let entry = self.variants.entry(variant.to_owned()).or_default();
        if entry.free_used < free_per_day {
            entry.free_used += 1;
            true
        } else if entry.bonus_used < entry.bonus_granted {
            entry.bonus_used += 1;
            true
        } else {
            false
        }
    }

    /// Grant one bonus attempt. `false` once today's cap is reached.
    pub fn grant_bonus(&mut self, variant: &str) -> bool {
        let cap = self.bonus_cap;
        let entry = self.variants.entry(variant.to_owned()).or_default();
        if entry.bonus_granted >= cap {
            return false;
        }
        entry.bonus_granted += 1;
        true
    }
}
