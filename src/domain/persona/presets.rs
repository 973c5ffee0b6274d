//! Preset values offered next to the free-text persona fields

/// Aesthetic tones offered as one-click presets
pub const AESTHETIC_PRESETS: &[&str] = &[
    "grainy",
    "vintage",
    "cinematic",
    "casual handheld",
    "soft-focus",
];

/// Example personalities
pub const PERSONALITY_PRESETS: &[&str] = &[
    "introverted traveler",
    "chaotic cozy artist",
    "disciplined fitness coach",
    "nostalgic film buff",
];

/// Example primary environments
pub const ENVIRONMENT_PRESETS: &[&str] = &[
    "urban cityscapes",
    "cozy room",
    "nature",
    "coastal towns",
];
