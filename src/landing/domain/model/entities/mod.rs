pub mod landing_resolver;
