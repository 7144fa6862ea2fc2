//! Sprout's main application entry point.
//! Handles command-line dispatch and coordinates template loading and
//! tree materialization.

use sprout::{
    cli::{get_args, Args},
    error::{default_error_handler, SproutResult},
    logger::init_logger,
    processor::bootstrap,
    template::load_template,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// * `init <TEMPLATE>` loads and validates the template, then materializes
///   the tree; any failure propagates to the default error handler, which
///   terminates with a non-zero status and a diagnostic
/// * any other command prints the version string and exits 0
/// * `init` without a template path exits 1 with no output
fn run(args: Args) -> SproutResult<()> {
    match args.command.as_str() {
        "init" => {
            let Some(template_path) = args.template else {
                std::process::exit(1);
            };

            let template = load_template(template_path)?;
            bootstrap(&template)
        }
        _ => {
            println!("version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
