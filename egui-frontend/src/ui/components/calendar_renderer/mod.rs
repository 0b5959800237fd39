pub mod layout;
pub mod rendering;

pub use rendering::render_calendar_grid;
