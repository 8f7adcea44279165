//! # Domain Models
//!
//! Value types shared by the fetcher and its display/log collaborators.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Trimmed, uppercased ticker |
//! | [`QuoteResult`] | Price, change and change percent rounded to two decimals |
//! | [`QuoteDisplay`] | Text and color projected into the display fields |
//! | [`ChangeColor`] | Positive/negative color token |
//! | [`WidgetStatus`] | Idle/loading/error phase plus banner message |
//! | [`UtcDateTime`] | UTC timestamp with millisecond ISO-8601 rendering |
//!
//! ## Rounding
//!
//! ```rust
//! use stockwidget_core::QuoteResult;
//!
//! let display = QuoteResult::from_values(189.4, -1.2345, 0.65).display();
//! assert_eq!(display.price_text, "$189.40");
//! assert_eq!(display.change_text, "-1.23 (0.65%)");
//! ```

mod quote;
mod status;
mod symbol;
mod timestamp;

pub use quote::{format_two_decimals, parse_leading_float, ChangeColor, QuoteDisplay, QuoteResult};
pub use status::{StatusPhase, WidgetStatus};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
