pub mod engine;
pub mod recovery;

pub use engine::{AuthEngine, AuthError, AuthMode, LoginRequest, RegisterRequest};
pub use recovery::RecoverySession;
