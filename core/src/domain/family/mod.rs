pub mod coefficient;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use coefficient::compute_coefficient;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
