pub mod api;
pub mod supabase_config;

pub use supabase_config::SupabaseConfig;
