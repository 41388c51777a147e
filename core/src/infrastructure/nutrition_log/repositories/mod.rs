pub mod daily_total_repository;
