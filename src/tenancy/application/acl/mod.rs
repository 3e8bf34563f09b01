pub mod tenant_resolution_facade_impl;
