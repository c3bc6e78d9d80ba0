#[tokio::main]
async fn main() {
    hackflow::start_server().await;
}
