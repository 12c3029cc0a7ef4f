use crate::types::err::{self};

/// A configuration value, paired with a name and the bounds of the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, so long as the value is within the bounds of the option.
    ///
    /// ```rust
    /// # use horn_prover::config::Config;
    /// let mut config = Config::default();
    /// assert!(config.depth_limit.set(64).is_ok());
    /// assert!(config.depth_limit.set(0).is_err());
    /// assert_eq!(config.depth_limit.value, 64);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || self.max < value {
            return Err(err::ConfigError::OutOfBounds {
                name: self.name,
                value: value.to_string(),
            });
        }
        self.value = value;
        Ok(())
    }
}
