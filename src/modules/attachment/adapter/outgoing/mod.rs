pub mod supabase_storage_bucket;

pub use supabase_storage_bucket::SupabaseStorageBucket;
