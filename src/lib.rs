//! azure-openai-chat
//!
//! Minimal client for Azure OpenAI's deployment-based chat-completions
//! endpoint (`https://{instance}.openai.azure.com/openai/deployments/{deployment}`):
//! build the URL from credentials, POST one JSON payload, return the decoded
//! response body. No retry, no streaming, no connection pooling beyond what
//! `reqwest` provides.
//!
//! Credentials are passed in explicitly; [`AzureCredentials::from_env`] is
//! the only place the process environment is read.
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;

pub use client::AzureChatClient;
pub use config::AzureCredentials;
pub use endpoint::{azure_endpoint, chat_completion_endpoint, sanitize_model_name};
pub use error::AzureError;
