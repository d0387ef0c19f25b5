pub mod postgrest_record_store;

pub use postgrest_record_store::PostgrestRecordStore;
