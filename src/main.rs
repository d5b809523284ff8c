use clap::{ArgAction, Parser};
use cuenta::{Options, get_result, interpreter::parser::Classifier};
use tracing_subscriber::EnvFilter;

/// cuenta evaluates spoken Spanish arithmetic such as `uno mas dos`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rejects words that are not numerals (`cero` to `nueve`) or operations
    /// (`mas`, `menos`) instead of letting them degrade silently.
    #[arg(short, long)]
    strict: bool,

    /// Treats only integer literals as numerals, and every other word as an
    /// operation.
    #[arg(short, long)]
    literal_classifier: bool,

    /// Prints only the resulting number.
    #[arg(short, long)]
    quiet: bool,

    /// Increases log output on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    tokens: Vec<String>,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .without_time()
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = Options { classifier: if args.literal_classifier {
                                Classifier::Literal
                            } else {
                                Classifier::Words
                            },
                            strict:     args.strict, };

    match get_result(&args.tokens, &options) {
        Ok(result) if args.quiet => println!("{result}"),
        Ok(result) => println!("El resultado de la interpretación es {result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
