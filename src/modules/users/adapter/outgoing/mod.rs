pub mod rest_model;
pub mod user_gateway_http;

pub use user_gateway_http::UserGatewayHttp;
