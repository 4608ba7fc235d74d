//! Presentation adapter.
//!
//! # Responsibility
//! - Turn week records into display-ready data: date groups, decade labels,
//!   event label segments, tooltip text and a plain-text grid.
//!
//! # Invariants
//! - Pure functions over builder output; nothing here feeds back into the
//!   timeline.

pub mod grid;
pub mod label;
pub mod tooltip;

pub use grid::{render_grid, week_glyph};
pub use label::{
    decade_label, display_name, split_link_markup, week_label, DecadeLabelClass, LabelSegment,
    LinkMarkup,
};
pub use tooltip::{
    group_by_date, render_tooltip, tooltip_blocks, DateGroup, TooltipBlock, TooltipEntry,
};
