pub mod acl;
pub mod rest;
pub mod web;
