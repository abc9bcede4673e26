//! Session manager - the chat operations.

mod create_chat;
mod delete_chat;
mod list_chats;
mod load_chat;
mod send_message;

pub use create_chat::{CreateChatHandler, CreateChatResult};
pub use delete_chat::{DeleteChatCommand, DeleteChatHandler};
pub use list_chats::{ChatSummary, ListChatsHandler};
pub use load_chat::{ChatTranscript, LoadChatHandler, LoadChatQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
