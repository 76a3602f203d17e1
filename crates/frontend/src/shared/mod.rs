pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod modal;
pub mod upload;
