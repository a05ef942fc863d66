pub mod announcements;
pub mod app_versions;
pub mod assignments;
pub mod attendance;
pub mod dashboard;
pub mod discussion;
pub mod divisions;
pub mod login;
pub mod meetings;
pub mod profile;
pub mod roadmaps;
pub mod roles;
pub mod users;
