pub mod health_resource;
pub mod landing_error_response_resource;
pub mod landing_view_resource;
