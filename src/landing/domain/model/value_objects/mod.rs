pub mod landing_render;
pub mod marketing_content;
pub mod navigation_route;
pub mod resolved_tenant;
pub mod tenant_resolution_snapshot;
