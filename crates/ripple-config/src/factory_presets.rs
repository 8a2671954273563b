//! Factory presets bundled with ripple.
//!
//! These are always available without external files and double as starting
//! points for user presets.

use crate::FilterPreset;
use crate::error::ConfigError;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "gentle",
    "smooth",
    "anti_alias",
    "telephone",
    "lofi",
    "sub_bass",
];

/// TOML content for factory presets.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("gentle", GENTLE_PRESET),
    ("smooth", SMOOTH_PRESET),
    ("anti_alias", ANTI_ALIAS_PRESET),
    ("telephone", TELEPHONE_PRESET),
    ("lofi", LOFI_PRESET),
    ("sub_bass", SUB_BASS_PRESET),
];

/// Second-order Butterworth at a quarter of the sample rate.
const GENTLE_PRESET: &str = r#"
name = "Gentle"
description = "2nd-order Butterworth at 12 kHz, a light top-end trim"
sample_rate = 48000

[filter]
family = "butterworth"
order = 2
cutoff = 0.25
"#;

const SMOOTH_PRESET: &str = r#"
name = "Smooth"
description = "8th-order Butterworth at 4.8 kHz, flat passband with a steep knee"
sample_rate = 48000

[filter]
family = "butterworth"
order = 8
cutoff = 0.1
"#;

/// Steep Chebyshev just below 20 kHz at 44.1 kHz.
const ANTI_ALIAS_PRESET: &str = r#"
name = "Anti Alias"
description = "8th-order Chebyshev at 20 kHz with 0.1 dB ripple, for decimation"
sample_rate = 44100

[filter]
family = "chebyshev"
order = 8
cutoff = 0.4535
ripple_db = 0.1
"#;

const TELEPHONE_PRESET: &str = r#"
name = "Telephone"
description = "6th-order Chebyshev at 3.4 kHz for a narrowband voice channel"
sample_rate = 8000

[filter]
family = "chebyshev"
order = 6
cutoff = 0.425
ripple_db = 0.5
"#;

const LOFI_PRESET: &str = r#"
name = "Lo-Fi"
description = "5th-order Chebyshev at 4 kHz with 2 dB ripple"
sample_rate = 44100

[filter]
family = "chebyshev"
order = 5
cutoff = 0.0907
ripple_db = 2.0
"#;

const SUB_BASS_PRESET: &str = r#"
name = "Sub Bass"
description = "4th-order Butterworth at 120 Hz for a subwoofer feed"
sample_rate = 48000

[filter]
family = "butterworth"
order = 4
cutoff = 0.0025
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use ripple_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<FilterPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| FilterPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by identifier or display name, case-insensitively.
///
/// # Example
///
/// ```rust
/// use ripple_config::get_factory_preset;
///
/// let preset = get_factory_preset("telephone").unwrap();
/// assert_eq!(preset.sample_rate, 8000);
/// ```
pub fn get_factory_preset(name: &str) -> Option<FilterPreset> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.to_lowercase() == name_lower)
    {
        return FilterPreset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Look up a factory preset, failing with [`ConfigError::PresetNotFound`]
/// when no identifier or display name matches.
pub fn find_preset(name: &str) -> Result<FilterPreset, ConfigError> {
    get_factory_preset(name).ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}

/// Get the identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name matches a factory preset (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
