pub mod application_gateway_http;
pub mod rest_model;

pub use application_gateway_http::ApplicationGatewayHttp;
