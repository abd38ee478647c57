pub mod gains_service;

pub use gains_service::GainsService;
