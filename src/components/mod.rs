//! UI components.

pub mod ai_message;
pub mod input_bar;
pub mod landing;
pub mod navbar;
pub mod user_message;
