// Mentor Chat
// Tone-selected persona in front of the AI gateway. Stateless; history lives on the client.

pub mod chat;
pub mod handlers;
pub mod tone;
