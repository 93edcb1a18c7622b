use stride_core::error::StrideError;
use stride_core::report::SearchReport;

pub fn print(report: &SearchReport) -> Result<(), StrideError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
