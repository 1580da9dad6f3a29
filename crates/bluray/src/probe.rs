//! Identification surface for disc-image-like inputs.

/// Extension-based probe confidence, out of 100.
pub const PROBE_SCORE_EXTENSION: u32 = 50;

/// File extensions registered for this format.
///
/// Registration data for the container layer, which routes
/// disc-image-like inputs here by extension; [`probe_score`] itself does
/// not inspect the name beyond the protocol-scheme check.
pub const EXTENSIONS: &[&str] = &["bdmv", "iso"];

/// Score an input name for this format.
///
/// Inputs already claimed by a higher-level disc-protocol scheme are
/// declined; everything else is offered the low extension-based
/// confidence.
pub fn probe_score(input_name: &str) -> u32 {
    if input_name.to_ascii_lowercase().contains("bluray:") {
        return 0;
    }
    PROBE_SCORE_EXTENSION
}
