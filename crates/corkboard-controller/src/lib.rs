pub mod controller;
pub mod drag;
pub mod events;

pub use controller::Controller;
pub use drag::DragState;
pub use events::BoardChanged;
