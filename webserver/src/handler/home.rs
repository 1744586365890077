pub const GREETING: &str = "Opinion Finance API!";

pub async fn get_home() -> &'static str {
    GREETING
}

pub async fn get_health() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
