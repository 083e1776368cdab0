pub mod controller;
pub mod ports;
pub mod queries;
