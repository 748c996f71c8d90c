use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = jobmatch_api::Args::parse();

	jobmatch_api::run(args).await
}
