use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Redis instance to seed.
    #[arg(long, default_value = "redis://127.0.0.1:6379")]
    redis_url: String,

    /// Delete previously seeded collections first.
    #[arg(long)]
    flush: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    seed::run(&args.redis_url, args.flush).await
}
