use serde::Serialize;

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;
/// Largest timestamp a JS `Date` can hold, in either direction.
pub const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;
/// 1970-01-01 was a Thursday; this many days separate it from the Monday before.
const EPOCH_DAYS_AFTER_MONDAY: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionKind {
    Daily,
    Weekly,
}

impl CompetitionKind {
    pub fn parse(name: &str) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("unknown competition kind: {other}")),
        }
    }

    fn length_ms(self) -> i64 {
        match self {
            Self::Daily => MS_PER_DAY,
            Self::Weekly => MS_PER_WEEK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Upcoming,
    Active,
    Finished,
}

/// Half-open UTC interval `[starts_at_ms, ends_at_ms)` in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetitionWindow {
    pub starts_at_ms: i64,
    pub ends_at_ms: i64,
}

impl CompetitionWindow {
    pub fn new(starts_at_ms: i64, ends_at_ms: i64) -> Result<Self, String> {
        check_timestamp(starts_at_ms)?;
        check_timestamp(ends_at_ms)?;
        if ends_at_ms <= starts_at_ms {
            return Err(format!(
                "competition must end after it starts: {starts_at_ms}..{ends_at_ms}"
            ));
        }
        Ok(Self {
            starts_at_ms,
            ends_at_ms,
        })
    }

    /// The UTC day, or the UTC week starting Monday, that contains `now_ms`.
    pub fn containing(kind: CompetitionKind, now_ms: i64) -> Result<Self, String> {
        check_timestamp(now_ms)?;
        let starts_at_ms = match kind {
            CompetitionKind::Daily => now_ms.div_euclid(MS_PER_DAY) * MS_PER_DAY,
            CompetitionKind::Weekly => {
                let shifted = now_ms + EPOCH_DAYS_AFTER_MONDAY * MS_PER_DAY;
                shifted.div_euclid(MS_PER_WEEK) * MS_PER_WEEK
                    - EPOCH_DAYS_AFTER_MONDAY * MS_PER_DAY
            }
        };
        Ok(Self {
            starts_at_ms,
            ends_at_ms: starts_at_ms + kind.length_ms(),
        })
    }

    /// The window of the same kind that starts when this one ends.
    pub fn next(&self, kind: CompetitionKind) -> Result<Self, String> {
        Self::containing(kind, self.ends_at_ms)
    }

    pub fn status(&self, now_ms: i64) -> CompetitionStatus {
        if now_ms < self.starts_at_ms {
            CompetitionStatus::Upcoming
        } else if now_ms < self.ends_at_ms {
            CompetitionStatus::Active
        } else {
            CompetitionStatus::Finished
        }
    }

    /// Milliseconds left while active, zero otherwise.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        match self.status(now_ms) {
            CompetitionStatus::Active => self.ends_at_ms - now_ms,
            _ => 0,
        }
    }

    pub fn report(&self, now_ms: i64) -> Result<CompetitionReport, String> {
        check_timestamp(now_ms)?;
        Ok(CompetitionReport {
            window: *self,
            status: self.status(now_ms),
            remaining_ms: self.remaining_ms(now_ms),
        })
    }
}

/// Where `now_ms` falls relative to a competition window, as shown in the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetitionReport {
    pub window: CompetitionWindow,
    pub status: CompetitionStatus,
    pub remaining_ms: i64,
}

/// The daily or weekly window running at `now_ms`.
pub fn current_competition(
    kind: CompetitionKind,
    now_ms: i64,
) -> Result<CompetitionReport, String> {
    CompetitionWindow::containing(kind, now_ms)?.report(now_ms)
}

fn check_timestamp(ms: i64) -> Result<(), String> {
    if (-MAX_TIMESTAMP_MS..=MAX_TIMESTAMP_MS).contains(&ms) {
        Ok(())
    } else {
        Err(format!("timestamp {ms} is outside the supported date range"))
    }
}
