// triage311 CLI entry point

use clap::Parser;
use triage311::{cli::Cli, driver, logging, output, samples, ticket};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = Cli::parse();
    logging::init_logging(args.verbose, args.quiet);

    let (complaint, sample_id) = samples::resolve_complaint(args.sample, &args.data);
    if let Some(id) = sample_id {
        output::print_info(&format!(
            "Using sample request #{id}: {}",
            samples::preview(&complaint, 60)
        ));
    }

    let record = driver::run(&complaint).await;

    if let Err(e) = driver::write_record(&args.output, &record) {
        output::print_error(&format!("Failed to write {}: {e}", args.output.display()));
        std::process::exit(1);
    }
    output::print_info(&format!("Result written to {}", args.output.display()));

    println!();
    ticket::print(&complaint, &record);
}
