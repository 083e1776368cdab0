pub mod controller;
pub mod forms;
pub mod ports;
pub mod queries;
