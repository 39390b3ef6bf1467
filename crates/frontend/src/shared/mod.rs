pub mod api_utils;
pub mod icons;
pub mod loading;
pub mod notify;
