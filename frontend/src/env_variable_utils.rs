use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
    pub static ref MAX_UPLOAD_BYTES: u64 = get_max_upload_bytes();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window().expect("should have a window in this context");

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    // Get the specific environment variable
    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    // Convert to string if it's not undefined
    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL").unwrap_or_else(|| "http://localhost:8080".to_string())
}

pub fn get_max_upload_bytes() -> u64 {
    parse_max_upload_bytes(get_env_var("MAX_UPLOAD_BYTES"))
}

fn parse_max_upload_bytes(raw: Option<String>) -> u64 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("MAX_UPLOAD_BYTES '{}' is not a byte count, using default", value);
            DEFAULT_MAX_UPLOAD_BYTES
        }),
        None => DEFAULT_MAX_UPLOAD_BYTES,
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Clipshelf".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
