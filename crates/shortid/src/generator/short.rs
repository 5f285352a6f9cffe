use core::fmt::Write;

use chrono::DateTime;
use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    rand::{RandSource, ThreadRandom},
    time::{SystemClock, TimeSource},
};

/// Default number of characters in the random segment.
pub const DEFAULT_SEGMENT_LENGTH: usize = 6;

/// Default charset: ASCII uppercase, lowercase, then digits (62 characters).
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default timestamp layout: `YYMMDDHHMMSS` in UTC (12 characters).
pub const DEFAULT_TIME_FORMAT: &str = "%y%m%d%H%M%S";

/// The counter wraps modulo this period and is rendered as exactly four
/// zero-padded decimal digits.
pub const COUNTER_PERIOD: u64 = 10_000;

/// A generator for short, human-readable, probabilistically-unique string
/// identifiers.
///
/// Every identifier is the concatenation
/// `<timestamp><random segment><counter>`, with no separators:
///
/// - the current wall-clock time, rendered with a strftime-style layout
/// - `length` characters drawn independently and uniformly at random from
///   the configured charset
/// - a counter shared by all calls on this instance, incremented atomically
///   per call and rendered modulo [`COUNTER_PERIOD`] as four zero-padded
///   digits
///
/// Identifiers are **probabilistically** unique, not globally unique: the
/// counter only breaks ties between calls that land in the same timestamp
/// resolution window with a colliding random draw. Two generator instances
/// running concurrently (or one instance across process restarts) can still
/// collide if timestamp, segment, and counter all coincide.
///
/// ## Features
/// - ✅ Thread-safe: every method takes `&self`; the counter is the sole
///   shared mutable state and is incremented atomically
/// - ✅ Infallible generation: all validation happens at construction
///
/// # Example
/// ```
/// use shortid::ShortIdGenerator;
///
/// let generator = ShortIdGenerator::new(8, "1234567890ABCDEF", "")?;
/// let id = generator.generate();
///
/// // 12-char default timestamp + 8-char segment + 4-digit counter
/// assert_eq!(id.len(), 12 + 8 + 4);
/// # Ok::<(), shortid::Error>(())
/// ```
#[derive(Debug)]
pub struct ShortIdGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource,
{
    segment_length: usize,
    charset: Box<[char]>,
    time_format: String,
    counter: AtomicU64,
    time: T,
    rng: R,
}

impl ShortIdGenerator {
    /// Creates a generator backed by the system clock and the thread-local
    /// RNG.
    ///
    /// Zero and empty arguments select the defaults:
    /// [`DEFAULT_SEGMENT_LENGTH`], [`DEFAULT_CHARSET`], and
    /// [`DEFAULT_TIME_FORMAT`].
    ///
    /// # Parameters
    /// - `length`: number of random characters per identifier; `0` selects
    ///   the default
    /// - `charset`: characters eligible for random draws, in order; `""`
    ///   selects the default
    /// - `time_format`: strftime-style layout for the timestamp prefix;
    ///   `""` selects the default
    ///
    /// # Errors
    /// - [`Error::InvalidCharset`] if the charset holds fewer than two
    ///   characters after defaulting
    /// - [`Error::InvalidTimeFormat`] if the layout cannot be rendered
    ///
    /// # Example
    /// ```
    /// use shortid::ShortIdGenerator;
    ///
    /// let generator = ShortIdGenerator::new(6, "", "%Y%m%d%H%M%S")?;
    /// let id = generator.generate();
    ///
    /// assert_eq!(id.len(), 14 + 6 + 4);
    /// # Ok::<(), shortid::Error>(())
    /// ```
    pub fn new(length: usize, charset: &str, time_format: &str) -> Result<Self> {
        Self::with_sources(length, charset, time_format, SystemClock, ThreadRandom)
    }
}

impl Default for ShortIdGenerator {
    /// Constructs a generator with the default segment length, charset, and
    /// timestamp layout.
    fn default() -> Self {
        Self::new(0, "", "").expect("default configuration is valid")
    }
}

impl<T, R> ShortIdGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a generator with explicit time and random sources.
    ///
    /// Defaulting and validation match [`ShortIdGenerator::new`]; the
    /// sources are what tests swap for mocks.
    ///
    /// # Errors
    /// - [`Error::InvalidCharset`] if the charset holds fewer than two
    ///   characters after defaulting
    /// - [`Error::InvalidTimeFormat`] if the layout cannot be rendered
    ///
    /// # Example
    /// ```
    /// use shortid::{ShortIdGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator =
    ///     ShortIdGenerator::with_sources(6, "", "", SystemClock, ThreadRandom)?;
    /// let id = generator.generate();
    ///
    /// assert_eq!(id.len(), 12 + 6 + 4);
    /// # Ok::<(), shortid::Error>(())
    /// ```
    pub fn with_sources(
        length: usize,
        charset: &str,
        time_format: &str,
        time: T,
        rng: R,
    ) -> Result<Self> {
        let segment_length = if length == 0 {
            DEFAULT_SEGMENT_LENGTH
        } else {
            length
        };
        let charset: Box<[char]> = if charset.is_empty() {
            DEFAULT_CHARSET.chars().collect()
        } else {
            charset.chars().collect()
        };
        if charset.len() < 2 {
            return Err(Error::InvalidCharset { len: charset.len() });
        }
        let time_format = if time_format.is_empty() {
            DEFAULT_TIME_FORMAT.to_owned()
        } else {
            time_format.to_owned()
        };
        validate_time_format(&time_format)?;

        Ok(Self {
            segment_length,
            charset,
            time_format,
            counter: AtomicU64::new(0),
            time,
            rng,
        })
    }

    /// Generates one identifier.
    ///
    /// Renders the current time, draws the random segment, then appends the
    /// atomically incremented counter modulo [`COUNTER_PERIOD`] as four
    /// zero-padded digits. Never fails; the only side effect is the counter
    /// increment.
    ///
    /// Sequential calls observe counter suffixes `0001`, `0002`, up through
    /// `9999`, then `0000`, wrapping. Two back-to-back calls on one instance
    /// therefore always differ, even when the timestamp and the random draw
    /// repeat.
    ///
    /// # Example
    /// ```
    /// use shortid::ShortIdGenerator;
    ///
    /// let generator = ShortIdGenerator::default();
    /// let a = generator.generate();
    /// let b = generator.generate();
    ///
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> String {
        let mut id = String::with_capacity(self.time_format.len() + self.segment_length + 4);

        write!(id, "{}", self.time.now().format(&self.time_format))
            .expect("time format is validated at construction");

        for _ in 0..self.segment_length {
            id.push(self.charset[self.rng.rand_index(self.charset.len())]);
        }

        let count = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1) % COUNTER_PERIOD;
        write!(id, "{count:04}").expect("formatting an integer into a String cannot fail");

        id
    }
}

/// Renders a fixed probe instant to reject layouts that cannot be
/// formatted; unknown and parse-only specifiers surface as render errors.
fn validate_time_format(format: &str) -> Result<()> {
    let mut probe = String::new();
    if write!(probe, "{}", DateTime::UNIX_EPOCH.format(format)).is_err() {
        return Err(Error::InvalidTimeFormat {
            format: format.to_owned(),
        });
    }
    Ok(())
}
