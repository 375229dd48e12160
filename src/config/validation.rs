//! Validation for numeric tuning constraints.
//!
//! The per-frame integration divides by the ramp and apex times, so a zero
//! or negative value would feed an infinite rate straight into velocity.
//! Those degenerate configurations are rejected here, before the resources
//! are built, instead of being detected mid-frame.

use super::data::TuningFile;

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}.{}' is invalid: {}",
            self.section, self.field, self.message
        )
    }
}

/// Helper macro for checking a strictly-positive field.
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Validate all numeric constraints in the tuning file.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let camera = &file.camera;
    check_positive!(errors, "camera", "smoothing", camera.smoothing);

    let movement = &file.movement;
    check_positive!(errors, "movement", "max_speed", movement.max_speed);
    check_positive!(
        errors,
        "movement",
        "acceleration_time",
        movement.acceleration_time
    );
    check_positive!(
        errors,
        "movement",
        "deceleration_time",
        movement.deceleration_time
    );
    check_positive!(errors, "movement", "dash_duration", movement.dash_duration);
    check_positive!(errors, "movement", "apex_height", movement.apex_height);
    check_positive!(errors, "movement", "apex_time", movement.apex_time);
    check_positive!(
        errors,
        "movement",
        "bullet_time_factor",
        movement.bullet_time_factor
    );
    check_positive!(
        errors,
        "movement",
        "bullet_time_duration",
        movement.bullet_time_duration
    );
    check_positive!(
        errors,
        "movement",
        "ground_check_size.0",
        movement.ground_check_size.0
    );
    check_positive!(
        errors,
        "movement",
        "ground_check_size.1",
        movement.ground_check_size.1
    );
    check_positive!(
        errors,
        "movement",
        "collider_stand_width",
        movement.collider_stand_width
    );
    check_positive!(
        errors,
        "movement",
        "collider_walk_width",
        movement.collider_walk_width
    );
    check_positive!(
        errors,
        "movement",
        "collider_height",
        movement.collider_height
    );

    // Dash impulse of zero is a no-op dash, not a division hazard; negative
    // would silently dash backwards.
    if movement.dash_impulse < 0.0 {
        errors.push(ValidationError {
            section: "movement",
            field: "dash_impulse",
            message: format!("must not be negative, got {}", movement.dash_impulse),
        });
    }

    errors
}
