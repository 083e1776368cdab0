pub mod controller;
pub mod form;
pub mod ports;
pub mod queries;
