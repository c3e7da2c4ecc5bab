//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `industry_register_form`: Industry registration form and its layout

mod field_renderer;
mod industry_register_form;

pub use industry_register_form::{draw as draw_industry_register, form_layout, FormHit};
#[cfg(test)]
pub use industry_register_form::FormLayout;
