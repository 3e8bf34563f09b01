pub mod channel_navigation_service_impl;
pub mod tracing_navigation_service_impl;
