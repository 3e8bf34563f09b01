pub mod landing_query_service_impl;
