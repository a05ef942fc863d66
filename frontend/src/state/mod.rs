pub mod auth;
pub mod crud;
pub mod list_store;
pub mod menu;
pub mod session;
