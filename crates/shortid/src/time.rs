use chrono::{DateTime, Utc};

/// A trait for time sources that supply the instant an identifier's
/// timestamp prefix renders from.
///
/// Swapping the implementation is how tests freeze the clock.
///
/// # Example
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use shortid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2024, 2, 10, 12, 5, 30).unwrap()
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.now().timestamp(), 1_707_566_730);
/// ```
pub trait TimeSource {
    /// Returns the current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// A `TimeSource` that reads the system clock in UTC.
///
/// UTC keeps the rendered calendar text stable even while a zone-local
/// clock repeats an hour across a daylight-saving transition.
#[derive(Default, Clone, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
