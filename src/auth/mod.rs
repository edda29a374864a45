pub mod static_tokens;
pub mod supabase;
pub mod verifier;

pub use static_tokens::StaticTokenVerifier;
pub use supabase::SupabaseVerifier;
pub use verifier::{create_verifier, TokenVerifier, UserId};
