//! Reusable UI components for the authentication screen.

pub mod dialog_frame;
pub mod input_field;
pub mod requirement_list;
pub mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use requirement_list::{render_requirement_list, REQUIREMENT_LIST_HEIGHT};
pub use status_indicator::{
    calculate_status_height, get_spinner_char, next_spinner_frame, render_status_indicator,
    StatusIndicator,
};
