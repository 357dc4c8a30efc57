/// Level restored by unmute unless configured otherwise.
pub const DEFAULT_UNMUTE_LEVEL: f32 = 0.1;

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Linear volume level with a zero/non-zero mute toggle.
///
/// Unmuting restores `unmute_level`, not the level in effect before muting:
/// muting twice from 0.7 lands on the unmute level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeControl {
    level: f32,
    unmute_level: f32,
}

impl VolumeControl {
    pub fn new(level: f32, unmute_level: f32) -> Self {
        let unmute_level = clamp_unit(unmute_level);
        Self {
            level: clamp_unit(level),
            unmute_level: if unmute_level > 0.0 {
                unmute_level
            } else {
                DEFAULT_UNMUTE_LEVEL
            },
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn set(&mut self, v: f32) {
        self.level = clamp_unit(v);
    }

    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    pub fn toggle_mute(&mut self) {
        self.level = if self.is_muted() { self.unmute_level } else { 0.0 };
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(DEFAULT_UNMUTE_LEVEL, DEFAULT_UNMUTE_LEVEL)
    }
}
