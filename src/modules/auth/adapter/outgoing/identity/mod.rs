pub mod jwt_verifier;
pub mod supabase_verifier;

pub use jwt_verifier::{JwtIdentityVerifier, JwtVerifierConfig};
pub use supabase_verifier::SupabaseIdentityVerifier;
