use std::path::Path;

use stride_core::error::StrideError;
use stride_core::phrases::{self, builtin};
use stride_core::text::normalize::normalize_text;

pub fn list() -> Result<(), StrideError> {
    println!("Available predefined phrase sets:\n");
    for name in builtin::PRESETS {
        let set = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<8} {} (v{}, {} phrases){}",
            name,
            set.name,
            set.version,
            set.phrases.len(),
            default_marker
        );
        if let Some(ref desc) = set.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), StrideError> {
    let set = builtin::load_preset(preset)?;

    println!("{} (version {})\n", set.name, set.version);
    if let Some(ref desc) = set.description {
        println!("{}\n", desc);
    }

    let max_len = set.phrases.iter().map(|p| p.len()).max().unwrap_or(10);
    println!("  {:<width$}  Searched as", "Phrase", width = max_len);
    println!("  {}", "-".repeat(max_len + 2 + 12));
    for phrase in &set.phrases {
        println!("  {:<width$}  {}", phrase, normalize_text(phrase), width = max_len);
    }
    println!();

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), StrideError> {
    let set = phrases::load_phrase_set(file)?;

    println!("Phrase set '{}' (v{}) is valid.", set.name, set.version);
    println!("  Phrases: {}", set.phrases.len());

    let unsearchable = phrases::unsearchable_phrases(&set);
    if !unsearchable.is_empty() {
        println!("\nWarnings:");
        for p in &unsearchable {
            println!("  - phrase '{}' has no letters and will be skipped", p);
        }
    }

    Ok(())
}
