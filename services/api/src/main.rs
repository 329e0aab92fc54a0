use design_catalog_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("design-catalog: {err}");
        std::process::exit(1);
    }
}
