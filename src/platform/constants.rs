//! Layout constants for the bundled aapt binaries.

/// Directory under the base directory that holds per-platform binaries
pub const BIN_DIR: &str = "bin";

/// File name of the bundled aapt binary, without extension
pub const AAPT_BINARY_STEM: &str = "aapt_64";

/// Mode applied to a bundled binary that is not yet executable (`S_IRWXU`)
pub const OWNER_RWX_MODE: u32 = 0o700;
