pub mod api_v1;
pub mod editor_handlers;
pub mod template_handlers;
