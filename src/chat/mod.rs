pub mod context;
pub mod fallback;
pub mod models;
pub mod session;

pub use fallback::FallbackResponder;
pub use models::{ConversationTurn, Speaker, Transcript};
pub use session::{ChatSession, SessionState, TurnError};
