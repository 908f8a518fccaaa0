//! Vanishing-point scroll effect model
//!
//! Pure per-frame geometry for a block of text that enters from the
//! bottom of a surface, travels upward and shrinks as it approaches
//! the top. No rendering or windowing dependencies; the model emits
//! [`scroll::LinePlacement`] values for a renderer to draw.

pub mod scroll;
pub mod stage;

pub use scroll::{
    scale_factor, shrink_factor, LineId, LinePlacement, ScrollLine, ScrollModel, ScrollParams,
    EXIT_THRESHOLD_FACTOR, LINE_HEIGHT_FACTOR, SCROLL_STEP_PX, SHRINK_CURVE_STRENGTH,
};
pub use stage::Stage;
