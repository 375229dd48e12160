//! Config domain: tuning file loading, validation, and plugin wiring.

mod data;
mod loader;
mod validation;


pub use data::{CameraTuningDef, MovementTuningDef, TuningFile};
pub use loader::{ConfigLoadError, load_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

const TUNING_PATH: &str = "assets/config/tuning.ron";

/// The validated tuning file, if one was loaded. Domains read their section
/// out of this at startup; `None` means every domain keeps its defaults.
#[derive(Resource, Debug, Default)]
pub struct TuningConfig(pub Option<TuningFile>);

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningConfig>()
            .add_systems(PreStartup, load_tuning_config);
    }
}

/// Loads and validates the tuning file. A missing or bad file must not keep
/// the game from booting, so every failure path logs and leaves defaults.
fn load_tuning_config(mut config: ResMut<TuningConfig>) {
    let file = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return;
        }
    };

    let issues = validate_tuning(&file);
    if issues.is_empty() {
        info!("Loaded tuning from {}", TUNING_PATH);
        config.0 = Some(file);
    } else {
        for issue in &issues {
            warn!("{}", issue);
        }
        warn!(
            "Rejected {} ({} issue(s)); using default tuning",
            TUNING_PATH,
            issues.len()
        );
    }
}
