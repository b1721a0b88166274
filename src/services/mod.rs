// src/services/mod.rs
pub mod alerts;
pub mod chatbot;
pub mod dialogue;
pub mod reminders;
pub mod translator;
