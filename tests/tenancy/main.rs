
mod request_host_tests;
mod tenancy_endpoint_tests;
