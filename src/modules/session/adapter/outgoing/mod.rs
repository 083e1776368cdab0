pub mod auth_gateway_http;
pub mod file_session_store;

pub use auth_gateway_http::AuthGatewayHttp;
pub use file_session_store::FileSessionStore;
