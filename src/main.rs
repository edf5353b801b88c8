#[tokio::main]
async fn main() -> std::io::Result<()> {
    arena_duel::run_with_config().await
}
