pub mod visitor_badge;

pub use visitor_badge::*;
