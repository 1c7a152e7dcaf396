pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod view;

pub use model::*;
pub use router::init_timetable_router;
