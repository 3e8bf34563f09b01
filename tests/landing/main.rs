
mod landing_query_service_tests;
mod landing_view_driver_tests;
