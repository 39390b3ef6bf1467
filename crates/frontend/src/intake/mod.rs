//! File intake widget (drag-and-drop + manual picker)
//!
//! Structure:
//! - model.rs: FileData and batch validation rules
//! - view.rs: CustomDragDrop widget and the DragPanel adapter

pub mod model;
pub mod view;

pub use model::{BatchRejection, FileData};
pub use view::{CustomDragDrop, DragPanel};
