//! Wire contracts shared between the frontend and the conversation backend.

pub mod chat;
pub mod upload;
