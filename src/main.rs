#[tokio::main]
async fn main() {
    if let Err(err) = riskgalaxy_lib::run().await {
        eprintln!("error: {err}");
        std::process::exit(if err.is_not_found() { 2 } else { 1 });
    }
}
