pub mod config;
pub mod landing;
pub mod shared;
pub mod tenancy;
