use std::path::Path;

use tracing::{debug, warn};

use configrules_core::container::{decode_file, encode_file, inspect_file, CodecSummary};
use configrules_core::types::ConfigRulesError;

use crate::config::ToolConfig;

pub fn compress(input: &Path, output: &Path, config: &ToolConfig) -> Result<(), ConfigRulesError> {
    if config.password.is_empty() {
        debug!("no password given, payload stays unencrypted");
    }
    let summary = encode_file(input, output, &config.password, &config.options)?;
    print_summary(&summary, config.json);
    Ok(())
}

pub fn decompress(input: &Path, output: &Path, config: &ToolConfig) -> Result<(), ConfigRulesError> {
    let summary = decode_file(input, output, &config.password)?;
    print_summary(&summary, config.json);
    Ok(())
}

pub fn inspect(input: &Path) -> Result<(), ConfigRulesError> {
    let header = inspect_file(input)?;
    match serde_json::to_string_pretty(&header) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            warn!(error = %e, "header not serializable, falling back to debug output");
            println!("{header:?}");
        }
    }
    Ok(())
}

fn print_summary(summary: &CodecSummary, json: bool) {
    if !json {
        println!("{summary}");
        return;
    }
    match serde_json::to_string_pretty(summary) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            warn!(error = %e, "summary not serializable, falling back to text");
            println!("{summary}");
        }
    }
}
