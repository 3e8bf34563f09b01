pub mod tenant_resolution_service_real_impl;
