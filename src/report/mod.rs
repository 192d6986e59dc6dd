//! Report templates and rendering
//!
//! Each meeting category maps to a fixed, ordered list of sections; the
//! renderer fills them in with generated content.

mod render;
mod template;

pub use render::{render, RenderedSection, Report};
pub use template::{template_for, MeetingCategory, ReportTemplate, Section};
