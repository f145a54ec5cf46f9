//! Error handling foundation for beacon.
//!
//! Only the `Result` alias lives here. Each crate defines its own error
//! enum and returns it wrapped in a rootcause `Report`.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
