pub mod supabase_identity_provider;

pub use supabase_identity_provider::SupabaseIdentityProvider;
