pub mod attendance;
pub mod geo;
pub mod location;
pub mod log;
pub mod observer;
pub mod service;
pub mod store;
pub mod weekly;
