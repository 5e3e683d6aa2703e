pub mod directory;
pub mod menu;
pub mod notification;
pub mod presence;
pub mod settings;
pub mod voice;
