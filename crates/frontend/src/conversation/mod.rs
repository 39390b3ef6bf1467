//! Conversation page UI module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions and pure transcript helpers
//! - view_model.rs: ConversationVm with RwSignals
//! - transcript.rs: RenderConversations component
//! - view.rs: Main component ConversationPage

pub mod model;
pub mod transcript;
pub mod view;
pub mod view_model;

pub use transcript::RenderConversations;
pub use view::ConversationPage;
pub use view_model::ConversationVm;
