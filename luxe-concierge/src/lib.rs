pub mod recommend;

pub use recommend::{Concierge, ModelError, RecommendationModel, FALLBACK_MESSAGE};
