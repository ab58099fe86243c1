//! Types for moon phase classification results.

/// The eight named phases of the synodic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All eight phases in cycle order (index 0 = New Moon).
pub const ALL_PHASE_NAMES: [MoonPhaseName; 8] = [
    MoonPhaseName::NewMoon,
    MoonPhaseName::WaxingCrescent,
    MoonPhaseName::FirstQuarter,
    MoonPhaseName::WaxingGibbous,
    MoonPhaseName::FullMoon,
    MoonPhaseName::WaningGibbous,
    MoonPhaseName::LastQuarter,
    MoonPhaseName::WaningCrescent,
];

impl MoonPhaseName {
    /// Display name, e.g. "Waxing Gibbous".
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// 0-based position in [`ALL_PHASE_NAMES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// True for the four phases detected by tolerance rather than by range.
    pub const fn is_principal(self) -> bool {
        matches!(
            self,
            Self::NewMoon | Self::FirstQuarter | Self::FullMoon | Self::LastQuarter
        )
    }
}

impl std::fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position within the mean synodic cycle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    /// Cycle fraction in [0, 1): 0 = new moon, 0.5 = full moon.
    pub fraction: f64,
    /// Days since the last mean new moon, in [0, synodic month).
    pub age_days: f64,
}

/// Everything the moon view shows for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    pub fraction: f64,
    pub age_days: f64,
    /// Illuminated fraction of the disk, 0..=1.
    pub illumination: f64,
    pub phase_name: MoonPhaseName,
    /// Display bucket 0..=7, see [`crate::sprite_bucket`].
    pub sprite_bucket: u8,
}

/// Coarse sky-darkness rating derived from lunar illumination.
///
/// Ordered best to worst, so `Excellent < Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObservingQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ObservingQuality {
    /// Classify by illumination: <0.10 Excellent, <0.25 Good, <0.40 Fair.
    pub fn from_illumination(illumination: f64) -> Self {
        if illumination < 0.10 {
            Self::Excellent
        } else if illumination < 0.25 {
            Self::Good
        } else if illumination < 0.40 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ObservingQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
