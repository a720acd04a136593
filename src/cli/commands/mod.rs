pub mod compare;
pub mod solve;
