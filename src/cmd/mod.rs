pub mod gesture;
pub mod suggest;
