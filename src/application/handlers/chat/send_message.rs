//! SendMessageHandler - route a turn to a backend and record it.

use std::sync::Arc;

use crate::application::responders::{GeneralResponder, NewsResponder, WeatherResponder};
use crate::domain::chat::{extract_location, ChatError, ChatSession, Intent};
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Command carrying one inbound turn.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub owner: UserId,
    pub message: String,
    /// Existing session to append to; a new one is created when absent.
    pub chat_id: Option<ChatId>,
    /// Display label for an implicitly-created session.
    pub session_name: Option<String>,
}

/// The recorded turn's reply and its session.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub response_text: String,
    pub chat_id: ChatId,
}

/// Handler for the append operation.
///
/// Classifies the message, invokes the matching response adapter (which
/// never fails outward), then appends the turn. A backend apology is still
/// a recorded turn: only repository lookup failures surface as errors.
pub struct SendMessageHandler {
    repository: Arc<dyn ChatRepository>,
    general: Arc<GeneralResponder>,
    news: Arc<NewsResponder>,
    weather: Arc<WeatherResponder>,
}

impl SendMessageHandler {
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        general: Arc<GeneralResponder>,
        news: Arc<NewsResponder>,
        weather: Arc<WeatherResponder>,
    ) -> Self {
        Self {
            repository,
            general,
            news,
            weather,
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, ChatError> {
        // 1. Classify and dispatch. The backend is consulted before the
        //    session is resolved, matching the recorded-turn ordering.
        let intent = Intent::classify(&cmd.message);
        tracing::debug!(?intent, "routing message");

        let response_text = match intent {
            Intent::News => self.news.respond(&cmd.message).await,
            Intent::Weather => {
                let location = extract_location(&cmd.message);
                self.weather.respond(&location).await
            }
            Intent::General => self.general.respond(&cmd.message).await,
        };

        // 2. Append to the addressed session, or start a new one.
        let chat_id = match cmd.chat_id {
            Some(id) => {
                let mut session = self
                    .repository
                    .get(&id, &cmd.owner)
                    .await?
                    .ok_or(ChatError::NotFound(id))?;
                session.append_turn(&cmd.message, &response_text);
                self.repository.save(&session).await?;
                id
            }
            None => {
                let mut session = ChatSession::named(
                    ChatId::new(),
                    cmd.owner.clone(),
                    cmd.session_name.as_deref(),
                    &cmd.message,
                );
                session.append_turn(&cmd.message, &response_text);
                self.repository.save(&session).await?;
                *session.id()
            }
        };

        Ok(SendMessageResult {
            response_text,
            chat_id,
        })
    }
}
