//! Landing page - document selection and bulk upload

pub mod api;
pub mod view;

pub use view::LandingPage;
