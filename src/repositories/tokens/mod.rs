pub mod token_repo;
