pub mod get_profile;
pub mod get_targets;
pub mod update_profile;
