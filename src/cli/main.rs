#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::{stderr, stdin, stdout};

use clap::Parser;
use horn_prover::prover::Prover;

mod args;
mod misc;
mod render;
mod repl;

use args::Args;
use render::TraceStyle;
use repl::Repl;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    #[cfg(feature = "log")]
    misc::init_logging(args.log_level);
    #[cfg(not(feature = "log"))]
    let _ = args.log_level;

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let style = TraceStyle {
        json: args.json,
        color: !args.no_color,
    };

    let mut repl = Repl::new(Prover::from_config(config), style, stdout(), stderr());

    if let Some(path) = &args.kb {
        match repl.load(path) {
            Ok(true) => {}
            Ok(false) if !args.ask.is_empty() => std::process::exit(1),
            Ok(false) => {}
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    if !args.ask.is_empty() {
        for query in &args.ask {
            if let Err(e) = repl.ask(query, args.trace) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = repl.run(stdin().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
