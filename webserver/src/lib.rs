pub mod app;
pub mod appstate;
pub mod config;
pub mod entity {
    pub mod market;
}
pub mod error {
    pub mod api;
    pub mod price;
    pub mod supply;
}
pub mod handler {
    pub mod home;
    pub mod market;
    pub mod supply;
}
pub mod repository {
    pub mod price;
    pub mod token;
}
pub mod response {
    pub mod api;
    pub mod market;
    pub mod supply;
}
pub mod service {
    pub mod market;
    pub mod price;
    pub mod supply;
}
pub mod state {
    pub mod common;
}
