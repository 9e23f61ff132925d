pub mod nav_context;

pub use nav_context::{use_nav, NavContext, Screen};
