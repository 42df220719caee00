use anyhow::Result;
use chainprobe::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
