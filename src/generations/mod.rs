pub mod apis;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod poller;
pub mod service;
pub mod structs;
pub mod util;

pub static DEFAULT_MAX_REFERENCE_IMAGES: usize = 5;
pub static DEFAULT_MAX_REFERENCE_IMAGE_BYTES: usize = 10_485_760;
