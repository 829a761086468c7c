use crate::error::ApkInfoError;

pub fn get_exit_code(error: &ApkInfoError) -> i32 {
    match error {
        ApkInfoError::ValidationError(_) | ApkInfoError::ConfigError(_) => 2,

        ApkInfoError::Parse(_) => 3,

        ApkInfoError::Extraction { .. } => 4,

        ApkInfoError::UnsupportedPlatform(_) => 125,

        ApkInfoError::Invocation { .. } => 126, // Standard "command cannot execute" exit code

        _ => 1,
    }
}
