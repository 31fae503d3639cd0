// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod events;

pub use app::{App, Prompt, PromptKind, Screen, SettingsState};
pub use app_config::{AppConfig, ConfigStore};
pub use events::{AppEvent, EventHandler, InputContext};
