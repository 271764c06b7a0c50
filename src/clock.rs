//! Time sources for the ledger.
//!
//! Record stamps are UTC instants, while day- and month-scoped views key on
//! the local calendar day. Both come from a [`Clock`] so tests can pin or
//! advance time.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, NaiveDate, SecondsFormat, Utc};

/// Abstraction over the system clock so temporal views and stamps stay
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the local timezone.
    fn today(&self) -> NaiveDate;

    /// RFC 3339 stamp with millisecond precision, the format records carry.
    fn stamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Clock backed by the real system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

struct ClockState {
    now: DateTime<Utc>,
    today: NaiveDate,
}

/// Manually driven clock for tests and previews. The instant and the local
/// day are held independently: advancing the instant does not roll the day,
/// so timezone assumptions never leak into assertions.
pub struct FixedClock {
    state: Mutex<ClockState>,
}

impl FixedClock {
    /// Clock pinned to noon UTC of `day`, with `day` as the local date.
    pub fn on(day: NaiveDate) -> Self {
        Self::at(noon_utc(day), day)
    }

    /// Clock pinned to an explicit instant and local day.
    pub fn at(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self {
            state: Mutex::new(ClockState { now, today }),
        }
    }

    /// Re-pins both the instant and the local day.
    pub fn set_day(&self, day: NaiveDate) {
        let mut state = self.state.lock().expect("clock state poisoned");
        state.now = noon_utc(day);
        state.today = day;
    }

    /// Moves the instant forward without touching the local day.
    pub fn advance(&self, delta: Duration) {
        let mut state = self.state.lock().expect("clock state poisoned");
        state.now += delta;
    }

    /// Moves both the instant and the local day forward.
    pub fn advance_days(&self, days: i64) {
        let mut state = self.state.lock().expect("clock state poisoned");
        state.now += Duration::days(days);
        state.today += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.state.lock().expect("clock state poisoned").now
    }

    fn today(&self) -> NaiveDate {
        self.state.lock().expect("clock state poisoned").today
    }
}

fn noon_utc(day: NaiveDate) -> DateTime<Utc> {
    let midday = day.and_hms_opt(12, 0, 0).expect("noon is a valid time");
    DateTime::from_naive_utc_and_offset(midday, Utc)
}
