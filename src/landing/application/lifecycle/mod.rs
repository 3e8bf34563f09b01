pub mod landing_view_driver;
pub mod tenant_resolution_lifecycle;
