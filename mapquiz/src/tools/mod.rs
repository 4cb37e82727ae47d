pub mod area;
pub mod check;
pub mod combine;
mod input;
