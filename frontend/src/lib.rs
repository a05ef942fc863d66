pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod table;
pub mod utils;

#[cfg(test)]
mod test_support;

fn init_logging() -> anyhow::Result<()> {
    console_log::init_with_level(log::Level::Debug)
        .map_err(|err| anyhow::anyhow!("console logger unavailable: {}", err))
}

/// Boots the dashboard: logging, panic reporting, runtime config, then the
/// router.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging() {
        leptos::logging::warn!("{:#}", err);
    }
    log::info!("starting MyCheva admin dashboard");

    leptos::spawn_local(async {
        if let Err(err) = config::init().await {
            log::error!("runtime config failed, using defaults: {:#}", err);
        }
    });

    router::mount_app();
}
