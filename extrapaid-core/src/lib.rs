//! extrapaid-core: transaction model, amount/date normalization, the
//! extra-charge taxonomy and the summary aggregator.

pub mod normalize;
pub mod summary;
pub mod taxonomy;
pub mod transaction;

pub use normalize::{normalize_amount, normalize_date};
pub use summary::{classify_and_summarize, ClassifiedTransaction, ExtraBreakdownRow, Summary};
pub use taxonomy::{tag_extra_type, ExtraCategory, TAXONOMY};
pub use transaction::Transaction;
