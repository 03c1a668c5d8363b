//! Wire models for the OpenAI Chat Completions API.

pub mod chat;
