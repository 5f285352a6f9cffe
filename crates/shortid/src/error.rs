/// A result type that defaults to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `shortid` can produce.
///
/// Identifier generation itself is infallible: every failure in this crate
/// is a configuration problem, reported once at construction time and never
/// retried. Both encoders are total and cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The charset cannot support a uniform random draw.
    ///
    /// A charset needs at least two characters after defaulting; drawing
    /// from a zero- or one-element set is degenerate.
    #[error("invalid configuration: charset needs at least two characters, got {len}")]
    InvalidCharset { len: usize },

    /// The strftime-style timestamp layout contains a specifier that cannot
    /// be rendered (unknown, or parse-only such as `%#z`).
    #[error("invalid configuration: time format {format:?} is not renderable")]
    InvalidTimeFormat { format: String },
}
