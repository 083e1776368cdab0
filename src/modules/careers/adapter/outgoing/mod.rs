pub mod career_gateway_http;
pub mod rest_model;

pub use career_gateway_http::CareerGatewayHttp;
