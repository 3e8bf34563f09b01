pub mod resolve_tenant_query_resource;
pub mod tenancy_error_response_resource;
pub mod tenant_resolution_resource;
