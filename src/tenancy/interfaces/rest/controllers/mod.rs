pub mod tenancy_rest_controller;
