mod config;
#[cfg(feature = "demo")]
mod demo_mock_server;
mod error;
mod gateway;
mod matching;
mod merge;
mod recipient;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

#[launch]
async fn rocket() -> _ {
    env_logger::init();

    #[cfg(feature = "demo")]
    demo_mock_server::init_demo().await;

    web::start_servers()
}
