use clap::Parser;
use go2sponge::config::Config;
use go2sponge::error::Error;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = env!("CARGO_BIN_NAME"),
    version,
    about = "Extract Go Println string literals into SpongeLang meaning IR"
)]
struct Cli {
    /// Go source file
    #[arg(allow_hyphen_values = true)]
    go_file: Option<PathBuf>,

    // Anything after the source file is ignored.
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    _rest: Vec<OsString>,

    /// Config file path (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn run(path: Option<&Path>, config: &Config) -> Result<(), Error> {
    let path = path.ok_or_else(|| Error::Usage {
        program: env!("CARGO_BIN_NAME").to_string(),
    })?;
    let source = go2sponge::read_source(path)?;
    let result = go2sponge::compile(&source, config);

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(result.as_bytes()).and_then(|_| stdout.flush()) {
        log::debug!("cannot write output: {}", e);
        process::exit(1);
    }
    Ok(())
}

fn main() {
    go2sponge::logging::init();
    let cli = Cli::parse();

    let config = cli
        .config
        .as_deref()
        .map(load_config)
        .unwrap_or_default();

    if let Err(e) = run(cli.go_file.as_deref(), &config) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}
