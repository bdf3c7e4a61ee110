//! HTTP request handlers

pub mod agent_chat;
pub mod health;
