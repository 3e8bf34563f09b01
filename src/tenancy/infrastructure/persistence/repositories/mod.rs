pub mod church_repository;
pub mod in_memory;
pub mod postgres;
pub mod tenant_lookup_cache_repository;
