pub mod church_status;
pub mod tenancy_domain_error;
