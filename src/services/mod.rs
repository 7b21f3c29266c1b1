pub mod family_service;
pub mod item_service;
