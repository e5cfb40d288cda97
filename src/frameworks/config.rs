use std::{env, time::Duration};

// Runtime/server configuration read from the environment.

pub fn http_port() -> u16 {
    env::var("APP_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn auth_service_url() -> String {
    env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:3002".to_string())
}

pub fn auth_timeout() -> Duration {
    let millis = env::var("AUTH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}

// No default here: a missing database URL must abort startup.
pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL").ok()
}
