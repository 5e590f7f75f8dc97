use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    clubvest::run().await
}
