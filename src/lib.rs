pub mod config;
pub mod error;
pub mod message;
pub mod poller;
pub mod profile;
pub mod publisher;
pub mod reddit;
pub mod state;
