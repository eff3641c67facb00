pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod ir;
pub mod logging;
pub mod normalize;

use config::Config;
use error::Error;
use extract::Extractor;
use log::debug;
use std::fs;
use std::path::Path;

pub fn compile(text: &str, config: &Config) -> String {
    // Stage 0
    let text = normalize::stage0(text);

    // Stage 1
    let extractor = Extractor::new(&config.call);
    let directives = extractor.extract(&text);
    debug!("kept {} {}(...) literal(s)", directives.len(), config.call);

    // Stage 2
    let nodes = ir::build(directives, config.wait_input);
    let output = emit::emit_ir(&nodes);

    let mut result = output.join("\n");
    result.push('\n');
    result
}

/// Whole file as UTF-8; every failure collapses into `Error::Read`.
pub fn read_source(path: &Path) -> Result<String, Error> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        debug!("cannot read {}: {}", path.display(), e);
        Error::Read(e)
    })
}
