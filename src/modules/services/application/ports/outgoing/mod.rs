pub mod service_gateway;

pub use service_gateway::{ItemPayload, SectionPayload, ServiceGateway};
