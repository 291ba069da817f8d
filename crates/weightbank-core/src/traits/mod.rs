mod durable_record;
mod fast_hash;

pub use durable_record::IDurableRecordBackend;
pub use fast_hash::IFastHashBackend;
