pub mod slide;
pub mod template;
