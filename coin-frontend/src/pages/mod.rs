pub mod coin;
pub mod home;
pub mod not_found;
