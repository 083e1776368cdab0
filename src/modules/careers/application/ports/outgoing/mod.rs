pub mod career_gateway;

pub use career_gateway::{CareerGateway, CareerPayload};
