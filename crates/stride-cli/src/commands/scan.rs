use std::path::PathBuf;
use std::time::Duration;

use stride_core::config::{self, SearchParams};
use stride_core::error::StrideError;
use stride_core::phrases::{self, builtin};
use stride_core::search::cancel::CancelFlag;

use crate::input::extractor_for;
use crate::output;
use crate::progress::LogObserver;

pub struct ScanArgs {
    pub input_file: PathBuf,
    pub phrases: Vec<String>,
    pub phrase_files: Vec<PathBuf>,
    pub presets: Vec<String>,
    pub config: Option<PathBuf>,
    pub min_distance: Option<usize>,
    pub max_distance: Option<usize>,
    pub paragraph_length: Option<usize>,
    pub context_radius: Option<usize>,
    pub timeout: Option<u64>,
    pub layout: bool,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
    pub details: bool,
}

pub fn run(args: ScanArgs) -> Result<(), StrideError> {
    let params = resolve_params(&args)?;
    let phrase_list = collect_phrases(&args)?;

    let bytes = std::fs::read(&args.input_file)?;
    let extractor = extractor_for(&args.input_file, args.layout);
    tracing::info!(
        file = %args.input_file.display(),
        backend = extractor.backend_name(),
        phrases = phrase_list.len(),
        "scanning"
    );

    let cancel = CancelFlag::new();
    if let Some(secs) = args.timeout {
        let timer = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(secs));
            timer.cancel();
        });
    }

    let mut observer = LogObserver;
    let report = stride_core::scan_document(
        &bytes,
        &*extractor,
        phrase_list.as_slice(),
        &params,
        &mut observer,
        Some(&cancel),
    )?;

    if let Some(path) = &args.output_file {
        // Always write JSON when saving to file
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
        eprintln!(
            "{} match(es) for {} phrase(s), written to {}",
            report.matches.len(),
            report.phrases_searched.len(),
            path.display()
        );
        return Ok(());
    }

    match args.output_format.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report, args.details),
    }

    Ok(())
}

/// Config file first, then individual flags on top.
fn resolve_params(args: &ScanArgs) -> Result<SearchParams, StrideError> {
    let mut params = match &args.config {
        Some(path) => config::load_params(path)?,
        None => SearchParams::default(),
    };

    if let Some(v) = args.min_distance {
        params.min_distance = v;
    }
    if let Some(v) = args.max_distance {
        params.max_distance = v;
    }
    if let Some(v) = args.paragraph_length {
        params.paragraph_length = v;
    }
    if let Some(v) = args.context_radius {
        params.context_radius = v;
    }

    params.validate()?;
    Ok(params)
}

fn collect_phrases(args: &ScanArgs) -> Result<Vec<String>, StrideError> {
    let mut list = args.phrases.clone();

    for path in &args.phrase_files {
        let set = phrases::load_phrase_set(path)?;
        tracing::debug!(name = %set.name, count = set.phrases.len(), "loaded phrase file");
        list.extend(set.phrases);
    }

    // Default to the standard preset when nothing else was given.
    let presets: Vec<String> = if args.presets.is_empty() && list.is_empty() {
        vec![builtin::DEFAULT_PRESET.to_string()]
    } else {
        args.presets.clone()
    };

    for name in &presets {
        let set = builtin::load_preset(name)?;
        list.extend(set.phrases);
    }

    Ok(list)
}
