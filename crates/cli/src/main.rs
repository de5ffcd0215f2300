use bluecone_cli::{Args, render, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bluecone=info,bluecone_cli=info,info".into()),
        )
        .init();

    let args = Args::parse();
    let response = run(&args)?;
    println!("{}", render(&response, args.pretty)?);

    Ok(())
}
