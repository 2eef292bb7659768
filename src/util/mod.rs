//! Browser utilities: persistence, theming, and form validation.

pub mod dark_mode;
pub mod storage;
pub mod validation;
