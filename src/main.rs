use jitterbeat::PayloadPolicy;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    jitterbeat::cli::run(PayloadPolicy::Timestamp).await
}
