pub mod landing_domain_error;
pub mod landing_view;
pub mod tenant_resolution;
