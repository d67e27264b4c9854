pub mod accordion;
pub mod alert;
pub mod animated_accordion;
pub mod basic_accordion;
pub mod button;
pub mod empty_state;
pub mod multi_accordion;
pub mod nested_accordion;
pub mod section_header;
