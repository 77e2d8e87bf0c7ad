//! Style families: one catalogue file per family

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A registered style family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleFamily {
    /// Stable identifier used on the command line
    pub id: String,
    /// Catalogue file, relative to the styles directory
    pub file: PathBuf,
    /// Name shown to users
    pub display_name: String,
}

impl StyleFamily {
    pub fn new(
        id: impl Into<String>,
        file: impl Into<PathBuf>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            display_name: display_name.into(),
        }
    }

    /// Built-in families in registration order
    pub fn builtin() -> Vec<StyleFamily> {
        BUILTIN_FAMILIES
            .iter()
            .map(|(id, file, display_name)| StyleFamily::new(*id, *file, *display_name))
            .collect()
    }
}

impl fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// (id, catalogue file, display name)
const BUILTIN_FAMILIES: &[(&str, &str, &str)] = &[
    ("all", "sdxl_styles_all.json", "Prompt Styler All"),
    ("artist", "sdxl_styles_artists.json", "Prompt Styler Artist"),
    ("camera", "sdxl_styles_camera.json", "Prompt Styler Camera"),
    ("celtic-art", "sdxl_styles_celticart.json", "Prompt Styler Celtic Art"),
    ("composition", "sdxl_styles_composition.json", "Prompt Styler Composition"),
    (
        "contemporary-nordic-art",
        "sdxl_styles_contempnordic.json",
        "Prompt Styler Contemporary Nordic Art",
    ),
    (
        "cyberpunk-surrealism",
        "sdxl_styles_cs.json",
        "Prompt Styler Cyberpunk Surrealism",
    ),
    ("depth", "sdxl_styles_depth.json", "Prompt Styler Depth"),
    ("environment", "sdxl_styles_environment.json", "Prompt Styler Environment"),
    ("fantasy-setting", "sdxl_styles_fs.json", "Prompt Styler Fantasy-Setting"),
    ("fashion", "sdxl_styles_fashion.json", "Prompt Styler Fashion"),
    ("filter", "sdxl_styles_filter.json", "Prompt Styler Filter"),
    ("focus", "sdxl_styles_focus.json", "Prompt Styler Focus"),
    ("gothic-revival", "sdxl_styles_gothrev.json", "Prompt Styler Gothic Revival"),
    ("horror", "sdxl_styles_horror.json", "Prompt Styler Horror"),
    ("impressionism", "sdxl_styles_impressionism.json", "Prompt Styler Impressionism"),
    ("irish-folk-art", "sdxl_styles_irishfolkart.json", "Prompt Styler Irish Folk Art"),
    ("lighting", "sdxl_styles_lighting.json", "Prompt Styler Lighting"),
    ("mile-high", "sdxl_styles_mh.json", "Prompt Styler MileHigh"),
    ("misc", "sdxl_styles_misc.json", "Prompt Styler Misc"),
    ("mood", "sdxl_styles_mood.json", "Prompt Styler Mood"),
    ("mythical-creature", "sdxl_styles_mc.json", "Prompt Styler Mythical Creature"),
    ("original", "sdxl_styles_original.json", "Prompt Styler Original"),
    ("quantum-realism", "sdxl_styles_qr.json", "Prompt Styler Quantum Realism"),
    (
        "romantic-nationalism",
        "sdxl_styles_romanticnat.json",
        "Prompt Styler Romantic Nationalism",
    ),
    ("sports", "sdxl_styles_sports.json", "Prompt Styler Sports"),
    ("steampunk-realism", "sdxl_styles_sr.json", "Prompt Styler SteamPunk Realism"),
    ("street", "sdxl_styles_street.json", "Prompt Styler Street"),
    ("subject", "sdxl_styles_subject.json", "Prompt Styler Subject"),
    ("surrealism", "sdxl_styles_surrealism.json", "Prompt Styler Surrealism"),
    ("theme", "sdxl_styles_themes.json", "Prompt Styler Theme"),
    ("time-of-day", "sdxl_styles_tod.json", "Prompt Styler Time of Day"),
    ("viking-art", "sdxl_styles_viking.json", "Prompt Styler Viking Art"),
    ("wildlife", "sdxl_styles_wildlife.json", "Prompt Styler Wildlife"),
    ("wyvern", "sdxl_styles_wyvern.json", "Prompt Styler Wyvern"),
];
