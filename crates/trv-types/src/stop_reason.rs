/// Human-readable label for a stop-reason code.
///
/// Codes follow the dataset convention (0–3); anything else is "Unknown".
/// Histograms keep the raw code; this is for presentation only.
pub fn stop_reason_label(code: &str) -> &'static str {
    match code.trim() {
        "0" => "No vortex feature",
        "1" => "Vortex merger",
        "2" => "Vortex weakening/splitting",
        "3" => "Moved out of boundary",
        _ => "Unknown",
    }
}
