pub mod acl;
pub mod lifecycle;
pub mod query_services;
