pub mod resolve_tenant_query;
