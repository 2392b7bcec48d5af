use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use scolarite::application::workflow::ReviewWorkflow;
use scolarite::config::RejectionReasons;
use scolarite::domain::ports::{ArchiveStoreBox, QueueStoreBox};
use scolarite::domain::preview::PreviewTransform;
use scolarite::infrastructure::in_memory::{InMemoryArchive, InMemoryQueue};
use scolarite::interfaces::csv::action_reader::ActionReader;
use scolarite::interfaces::csv::gesture_reader::GestureReader;
use scolarite::interfaces::csv::submission_reader::SubmissionReader;
use scolarite::interfaces::csv::submission_writer::SubmissionWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay administrator decisions over a set of pending submissions
    Review {
        /// Pending submissions CSV file
        submissions: PathBuf,

        /// Review actions CSV file
        actions: PathBuf,

        /// JSON array of predefined rejection reasons (optional). Defaults to
        /// the built-in list.
        #[arg(long)]
        reasons: Option<PathBuf>,
    },
    /// Replay a preview gesture trace and print the final transform
    Preview {
        /// Gesture trace CSV file
        trace: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Review {
            submissions,
            actions,
            reasons,
        } => review(submissions, actions, reasons).await,
        Command::Preview { trace } => preview(trace),
    }
}

async fn review(
    submissions: PathBuf,
    actions: PathBuf,
    reasons: Option<PathBuf>,
) -> Result<()> {
    let reasons = match reasons {
        Some(path) => RejectionReasons::from_path(path).into_diagnostic()?,
        None => RejectionReasons::default(),
    };

    let queue: QueueStoreBox = Box::new(InMemoryQueue::new());
    let archive: ArchiveStoreBox = Box::new(InMemoryArchive::new());
    let mut workflow = ReviewWorkflow::new(queue, archive, reasons);

    // Seed the review queue
    let file = File::open(submissions).into_diagnostic()?;
    for result in SubmissionReader::new(file).submissions() {
        match result {
            Ok(submission) => {
                if let Err(e) = workflow.submit(submission).await {
                    eprintln!("Error queueing submission: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading submission: {}", e);
            }
        }
    }

    // Replay decisions
    let file = File::open(actions).into_diagnostic()?;
    for result in ActionReader::new(file).actions() {
        match result {
            Ok(action) => {
                if let Err(e) = workflow.process_action(action).await {
                    eprintln!("Error processing action: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    // Output final state
    let results = workflow.into_results().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = SubmissionWriter::new(stdout.lock());
    writer.write_submissions(results).into_diagnostic()?;

    Ok(())
}

fn preview(trace: PathBuf) -> Result<()> {
    let mut transform = PreviewTransform::new();

    let file = File::open(trace).into_diagnostic()?;
    for result in GestureReader::new(file).events() {
        match result {
            Ok(event) => transform.apply(event),
            Err(e) => {
                eprintln!("Error reading gesture event: {}", e);
            }
        }
    }

    println!("open,scale,translate_x,translate_y");
    println!(
        "{},{},{},{}",
        transform.is_open(),
        transform.scale(),
        transform.translate_x(),
        transform.translate_y()
    );

    Ok(())
}
