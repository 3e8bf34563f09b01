pub mod church_id;
pub mod request_host;
pub mod subdomain;
pub mod tenant_lookup;
