pub mod announcement_section;
pub mod blog_preview;
pub mod field_inputs;
pub mod footer;
pub mod info_cta;
pub mod navbar;
pub mod programs_section;
pub mod team_section;
pub mod user_card;
