pub mod in_memory_tenant_lookup_cache_repository_impl;
