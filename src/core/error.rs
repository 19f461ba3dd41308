use chrono::NaiveDate;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TwError {
    /// An error occurred during an HTTP request (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A historical request was made with a start date after its end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDates {
        /// First calendar day requested.
        start: NaiveDate,
        /// Last calendar day requested.
        end: NaiveDate,
    },

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("invalid date '{input}': {source}")]
    DateParse {
        /// The rejected input.
        input: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },

    /// Statistics were requested over a table with no rows.
    #[error("cannot summarize an empty price table")]
    EmptyTable,

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited output file could not be written or parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
