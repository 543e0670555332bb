use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_FILE: &str = "desktop.catalog.toml";
const SETTINGS_TOGGLES: [&str; 5] = [
    "show_calculator",
    "show_notepad",
    "show_volume_control",
    "show_music_player",
    "show_battery",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SizeHint {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PositionHint {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WindowEntry {
    id: String,
    title: String,
    icon: String,
    content: String,
    group: String,
    #[serde(default)]
    stacking: Option<String>,
    #[serde(default)]
    settings_toggle: Option<String>,
    #[serde(default)]
    default_size: Option<SizeHint>,
    #[serde(default)]
    default_position: Option<PositionHint>,
    #[serde(default)]
    resizable: Option<bool>,
    #[serde(default)]
    maximizable: Option<bool>,
    #[serde(default)]
    closable: Option<bool>,
    #[serde(default)]
    show_in_start_menu: Option<bool>,
    #[serde(default)]
    show_in_taskbar: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Catalog {
    schema_version: u32,
    layout: toml::Value,
    windows: Vec<WindowEntry>,
}

fn validate(catalog: &Catalog) -> Result<(), String> {
    if catalog.schema_version != 1 {
        return Err(format!(
            "catalog schema mismatch: expected 1 found {}",
            catalog.schema_version
        ));
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.windows {
        if entry.id.is_empty()
            || !entry
                .id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(format!("invalid window id `{}`", entry.id));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(format!("duplicate window id `{}`", entry.id));
        }
        if !matches!(
            entry.group.as_str(),
            "portfolio" | "utility" | "game" | "folder"
        ) {
            return Err(format!("unknown group `{}` on `{}`", entry.group, entry.id));
        }
        if let Some(stacking) = &entry.stacking {
            if !matches!(stacking.as_str(), "app" | "folder") {
                return Err(format!("unknown stacking `{stacking}` on `{}`", entry.id));
            }
        }
        if let Some(toggle) = &entry.settings_toggle {
            if !SETTINGS_TOGGLES.contains(&toggle.as_str()) {
                return Err(format!(
                    "unknown settings toggle `{toggle}` on `{}`",
                    entry.id
                ));
            }
        }
        if let Some(size) = &entry.default_size {
            if size.width <= 0 || size.height <= 0 {
                return Err(format!("non-positive default_size on `{}`", entry.id));
            }
        }
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(CATALOG_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&catalog) {
        panic!("invalid window catalog {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
