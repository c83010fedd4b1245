pub mod app;
pub mod canvas;
pub mod dom;
pub mod drag;
pub mod editor;
pub mod element_view;
pub mod error;
pub mod image_upload;
pub mod model;
pub mod palette;
pub mod property_form;
pub mod property_panel;
pub mod state;
pub mod toolbar;
pub mod viewport;
