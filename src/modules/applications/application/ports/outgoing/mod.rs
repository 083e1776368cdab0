pub mod application_gateway;

pub use application_gateway::ApplicationGateway;
