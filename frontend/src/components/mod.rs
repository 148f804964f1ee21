pub mod about;
pub mod document_section;
pub mod header;
pub mod predictor_form;
pub mod results;
pub mod sidebar;
pub mod theme_toggle;
pub mod utils;
