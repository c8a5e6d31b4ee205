use std::path::PathBuf;

use clap::Parser;
use quiz_progress::progress::DEFAULT_PROGRESS_PATH;
use quiz_progress::{
    FileProgress, JsonFileSource, JsonFileStore, MemoryProgress, ProgressStore, Quiz,
    DEFAULT_QUESTIONS_PATH,
};

const LOGGING_HELP: &str = "Logging is configured with RUST_LOG and written to stderr, which \
    shares the screen with the quiz. Redirect it when enabling logs, e.g. \
    `RUST_LOG=debug quiz-progress 2>quiz.log`.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = LOGGING_HELP)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// JSON file that keeps progress between launches
    #[arg(short, long, default_value = DEFAULT_PROGRESS_PATH)]
    progress: PathBuf,

    /// Keep progress in memory only
    #[arg(long)]
    no_save: bool,

    /// Forget saved progress before starting
    #[arg(long)]
    fresh: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    let source = JsonFileSource::new(&args.questions);

    let result = if args.no_save {
        play(MemoryProgress::default(), &source, args.fresh)
    } else {
        log::debug!("saving progress to {}", args.progress.display());
        let progress = FileProgress::new(JsonFileStore::new(args.progress));
        play(progress, &source, args.fresh)
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn play<P: ProgressStore>(
    mut progress: P,
    source: &JsonFileSource,
    fresh: bool,
) -> Result<(), quiz_progress::QuizError> {
    if fresh {
        log::info!("clearing saved progress");
        progress.clear();
    }
    Quiz::load_from(progress, source).run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_help_mentions_stderr_redirect() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("RUST_LOG"));
        assert!(help.contains("2>quiz.log"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["quiz-progress"]);
        assert_eq!(args.questions, PathBuf::from(DEFAULT_QUESTIONS_PATH));
        assert_eq!(args.progress, PathBuf::from(DEFAULT_PROGRESS_PATH));
        assert!(!args.no_save && !args.fresh);
    }
}
