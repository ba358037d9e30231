pub mod aggregate;
pub mod backup;
pub mod codec;
pub mod config;
pub mod filter;
pub mod invoice;
pub mod store;

pub use codec::LabelCodec;
pub use filter::Query;
pub use store::{LoadOutcome, RecordStore};
