mod api;
mod app;
mod config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    app::run().await
}
