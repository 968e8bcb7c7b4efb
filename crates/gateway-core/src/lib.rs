//! gateway-core
//!
//! Pure translation-side types for the legacy payment gateway:
//! - logical payment records (what the JSON side sends)
//! - monetary amounts with implied-decimal conversion
//! - injectable clocks for the record date
//! - the translation error taxonomy

pub mod amount;
pub mod clock;
pub mod error;
pub mod record;

pub use amount::Amount;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TranslationError;
pub use record::LogicalRecord;
