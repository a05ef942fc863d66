pub mod panel;

pub use panel::{ProfileCard, ProfilePage};
