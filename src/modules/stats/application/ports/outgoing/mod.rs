pub mod stats_gateway;

pub use stats_gateway::StatsGateway;
