pub mod config;
pub mod error;
pub mod hosted_auth;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod state_token;

pub use hosted_auth::{Client, HostedAuthorizeRequest, Provider, ResponseType};
