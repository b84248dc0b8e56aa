//! Portfolio and blog renderer: navigation state, static content and the
//! tera rendering boundary.

pub mod args;
pub mod r#async;
pub mod config;
pub mod content;
pub mod decoration;
pub mod error;
pub mod fs;
pub mod navigation;
pub mod renderer;
pub mod replay;
pub mod site;
pub mod templating;
