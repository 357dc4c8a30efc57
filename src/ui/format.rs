/// Format seconds as `MM:SS`.
///
/// Minutes truncate toward zero and the seconds part uses the absolute
/// remainder, so a remaining time that overshoots slightly below zero at the
/// end of a track still renders as `00:00`. Non-finite input renders as
/// `00:00`.
pub fn format_mmss(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let minutes = (seconds / 60.0).trunc() as i64;
    let secs = (seconds % 60.0).abs().floor() as i64;
    format!("{:02}:{:02}", minutes, secs)
}
