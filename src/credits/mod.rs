pub mod controller;
pub mod service;
pub mod structs;

pub static ESTIMATED_COST_PER_GENERATION: f64 = 0.05;
