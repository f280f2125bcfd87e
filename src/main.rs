//! dropin's entry point: parses arguments, sets up logging and hands over
//! to the runner.

use dropin::{
    cli::{get_args, get_log_level_from_verbose},
    error::default_error_handler,
    runner::run,
};

fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
