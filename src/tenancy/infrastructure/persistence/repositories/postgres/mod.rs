pub mod sqlx_church_repository_impl;
