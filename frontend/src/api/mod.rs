mod announcements;
mod app_versions;
mod assignments;
mod attendance;
mod auth;
pub mod client;
mod forums;
mod meetings;
mod organization;
mod roadmaps;
pub mod types;
mod users;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
