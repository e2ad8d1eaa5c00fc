//! Key-injecting proxy for the completion API.

mod handler;
pub mod server;

pub use handler::{ProxyConfig, ProxyHandler, ProxyResponse};
