use async_trait::async_trait;
use luxe_shared::Room;
use std::sync::Arc;

/// Shown whenever the external model cannot answer.
pub const FALLBACK_MESSAGE: &str =
    "Our AI concierge is currently attending to other guests. Please try again shortly.";

const EMPTY_REPLY_MESSAGE: &str =
    "I'm sorry, I couldn't process that recommendation at the moment.";

pub type ModelError = Box<dyn std::error::Error + Send + Sync>;

/// External text-generation collaborator. Strictly request/response;
/// retries and timeouts are the implementation's own business.
#[async_trait]
pub trait RecommendationModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Guest-facing room recommendations.
///
/// The model call has no bearing on booking correctness: every failure
/// path, including an unconfigured model, degrades to a static message
/// and never surfaces as an error to the caller.
pub struct Concierge {
    model: Option<Arc<dyn RecommendationModel>>,
}

impl Concierge {
    pub fn new(model: Arc<dyn RecommendationModel>) -> Self {
        Self { model: Some(model) }
    }

    /// A concierge with no model behind it; always answers with the
    /// fallback message.
    pub fn offline() -> Self {
        Self { model: None }
    }

    pub async fn recommend(&self, guest_prompt: &str, available_rooms: &[Room]) -> String {
        let Some(model) = &self.model else {
            return FALLBACK_MESSAGE.to_owned();
        };

        let prompt = build_prompt(guest_prompt, available_rooms);
        match model.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_REPLY_MESSAGE.to_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "recommendation model unavailable");
                FALLBACK_MESSAGE.to_owned()
            }
        }
    }
}

fn build_prompt(guest_prompt: &str, rooms: &[Room]) -> String {
    let rooms_info = rooms
        .iter()
        .map(|r| {
            format!(
                "{}: {}/night, Amenities: {}",
                r.name,
                r.price,
                r.amenities.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the concierge of a luxury hotel in Surat, Gujarat. \
         The guest is asking: \"{guest_prompt}\". \
         Available rooms in the hotel: {rooms_info}. \
         Task: recommend the best 1-2 rooms for their specific needs. \
         Tone: professional, premium and welcoming; add local tips when relevant."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_shared::RoomCategory;

    struct Scripted(&'static str);

    #[async_trait]
    impl RecommendationModel for Scripted {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Ok(self.0.to_owned())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl RecommendationModel for Unreachable {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Err("quota exceeded".into())
        }
    }

    fn rooms() -> Vec<Room> {
        vec![Room {
            id: "r2".into(),
            name: "Diamond City Deluxe".into(),
            category: RoomCategory::Deluxe,
            price: 8500,
            description: "business deluxe".into(),
            amenities: vec!["Free WiFi".into(), "Desk".into()],
            images: vec!["img.jpg".into()],
            capacity: 2,
            available: true,
        }]
    }

    #[tokio::test]
    async fn test_model_reply_passes_through() {
        let concierge = Concierge::new(Arc::new(Scripted("Take the Deluxe.")));
        let reply = concierge.recommend("desk for work", &rooms()).await;
        assert_eq!(reply, "Take the Deluxe.");
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let concierge = Concierge::new(Arc::new(Unreachable));
        let reply = concierge.recommend("anything", &rooms()).await;
        assert_eq!(reply, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_offline_concierge_uses_fallback() {
        let reply = Concierge::offline().recommend("anything", &rooms()).await;
        assert_eq!(reply, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_blank_reply_is_replaced() {
        let concierge = Concierge::new(Arc::new(Scripted("  ")));
        let reply = concierge.recommend("anything", &rooms()).await;
        assert_eq!(reply, EMPTY_REPLY_MESSAGE);
    }

    #[test]
    fn test_prompt_carries_room_details() {
        let prompt = build_prompt("river view for two nights", &rooms());
        assert!(prompt.contains("river view for two nights"));
        assert!(prompt.contains("Diamond City Deluxe: 8500/night"));
        assert!(prompt.contains("Free WiFi, Desk"));
    }
}
