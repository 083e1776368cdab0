pub mod stats_gateway_http;

pub use stats_gateway_http::StatsGatewayHttp;
