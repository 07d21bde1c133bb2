use std::{env, io::{self, BufRead, Write}, process::ExitCode, sync::Once};

use expr_lexer::{render_error, tokenize};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn read_expression() -> io::Result<(String, &'static str)> {
    let args: Vec<String> = env::args().skip(1).collect();

    if !args.is_empty() {
        return Ok((args.join(" "), "args"));
    }

    print!("Enter the expression to tokenize: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);

    Ok((line, "stdin"))
}

fn main() -> ExitCode {
    init_tracing();

    let (expression, name) = match read_expression() {
        Ok(read) => read,
        Err(error) => {
            eprintln!("Failed to read expression: {}", error);
            return ExitCode::FAILURE;
        }
    };

    match tokenize(&expression) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }

            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(%error, "tokenize failed");
            eprint!("{}", render_error(&error, &expression, name));
            ExitCode::FAILURE
        }
    }
}
