pub mod save_dialog;
pub mod texture;
