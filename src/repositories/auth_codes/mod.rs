pub mod auth_code_repo;
