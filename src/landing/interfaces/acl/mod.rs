pub mod navigation_service;
pub mod tenant_resolution_service;
