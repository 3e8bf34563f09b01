pub mod tenant_resolution_query_service_impl;
