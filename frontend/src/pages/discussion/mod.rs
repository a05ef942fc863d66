pub mod panel;
pub mod repository;
pub mod thread;
pub mod utils;
pub mod view_model;

pub use panel::ForumsPage;
pub use thread::ForumThreadPage;
