//! Configuration for packing.

use crate::ArchiveError;
use crate::Result;

/// Deflate level used when none is configured.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Configuration for pack operations.
///
/// Every entry is written with Deflate; only the level is tunable.
///
/// # Examples
///
/// ```
/// use zip_handler_core::PackConfig;
///
/// let config = PackConfig::default().with_compression_level(9);
/// assert_eq!(config.deflate_level(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackConfig {
    /// Deflate compression level (1-9).
    ///
    /// Default: `None`, which means level 6.
    pub compression_level: Option<u8>,
}

impl PackConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Deflate compression level.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Returns the effective Deflate level.
    #[must_use]
    pub fn deflate_level(&self) -> u8 {
        self.compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in range 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
