pub mod coin_info;
pub mod description;
pub mod layout;
pub mod loading;
pub mod prediction;
pub mod sidebar;
