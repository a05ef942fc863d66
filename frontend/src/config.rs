use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub asset_base_url: Option<String>,
}

impl RuntimeConfig {
    fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            asset_base_url: self.asset_base_url.or(fallback.asset_base_url),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.asset_base_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ResolvedConfig {
    api_base_url: String,
    asset_base_url: String,
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
                .filter(|v| !v.trim().is_empty())
        })
    }

    /// `window[name] = { api_base_url, asset_base_url }`, keys in either case.
    pub fn read(name: &str) -> RuntimeConfig {
        let Some(window) = web_sys::window() else {
            return RuntimeConfig::default();
        };
        let any = match js_sys::Reflect::get(&window, &name.into()) {
            Ok(any) if !any.is_undefined() && !any.is_null() => any,
            _ => return RuntimeConfig::default(),
        };
        let obj = js_sys::Object::from(any);
        RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            asset_base_url: read_key(&obj, &["ASSET_BASE_URL", "asset_base_url"]),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn read(_name: &str) -> RuntimeConfig {
        RuntimeConfig::default()
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn finish(config: RuntimeConfig) -> ResolvedConfig {
    ResolvedConfig {
        api_base_url: config
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        asset_base_url: config
            .asset_base_url
            .unwrap_or_else(|| DEFAULT_ASSET_BASE_URL.to_string()),
    }
}

async fn resolve() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    // env.js wins over the config global, which wins over ./config.json.
    let mut config = globals::read("__MYCHEVA_ENV").merge(globals::read("__MYCHEVA_CONFIG"));
    if !config.is_complete() {
        if let Some(file) = fetch_runtime_config().await {
            config = config.merge(file);
        }
    }
    let resolved = finish(config);
    let _ = CONFIG.set(resolved.clone());
    CONFIG.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    resolve().await.api_base_url
}

pub async fn init() -> anyhow::Result<()> {
    let config = resolve().await;
    if config.api_base_url.is_empty() {
        anyhow::bail!("API base URL resolved to an empty string");
    }
    log::info!(
        "runtime config loaded: api={} assets={}",
        config.api_base_url,
        config.asset_base_url
    );
    Ok(())
}

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Joins a stored file path onto the asset base. Absolute URLs pass through.
pub fn resolve_asset_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    let encoded = utf8_percent_encode(path.trim_start_matches('/'), PATH_SEGMENT);
    format!("{}/{}", base.trim_end_matches('/'), encoded)
}

/// [`resolve_asset_url`] against the loaded config, or the default base
/// before `init` has finished.
pub fn asset_url(path: &str) -> String {
    let base = CONFIG
        .get()
        .map(|config| config.asset_base_url.as_str())
        .unwrap_or(DEFAULT_ASSET_BASE_URL);
    resolve_asset_url(base, path)
}
