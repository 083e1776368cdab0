pub mod rest_model;
pub mod service_gateway_http;

pub use service_gateway_http::ServiceGatewayHttp;
