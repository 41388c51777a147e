pub mod user_profile_repository;
