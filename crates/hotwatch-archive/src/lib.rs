//! Day-scoped record of descriptions already forwarded.
//!
//! Each local calendar day gets its own `sent_items_YYYYMMDD.json` file under
//! the archive directory. A day's record only ever grows; yesterday's file is
//! simply never read again.

pub mod error;
pub mod record;
pub mod store;

pub use error::ArchiveError;
pub use record::SentRecord;
pub use store::ArchiveStore;
