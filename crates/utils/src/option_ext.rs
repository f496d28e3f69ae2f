use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Display the contained value, or "none"
    ///
    /// Generic over anything that implements `Display`. Useful for fields that
    /// only some log formats provide, such as the step status flag.
    ///
    /// ```rust
    /// # use swtools_utils::OptionExt;
    /// let flag: Option<u32> = Some(2);
    /// assert_eq!(flag.display(), "2");
    ///
    /// let flag: Option<u32> = None;
    /// assert_eq!(flag.display(), "none");
    /// ```
    fn display(&self) -> String;

    /// Display the contained value, or a custom placeholder
    ///
    /// ```rust
    /// # use swtools_utils::OptionExt;
    /// let ranks: Option<u32> = None;
    /// assert_eq!(ranks.display_or("-"), "-");
    /// ```
    fn display_or(&self, placeholder: &str) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        self.display_or("none")
    }

    fn display_or(&self, placeholder: &str) -> String {
        self.as_ref()
            .map_or_else(|| placeholder.to_string(), |value| f!("{value}"))
    }
}
