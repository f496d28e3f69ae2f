/// Extends string types with useful functions
pub trait StringExt {
    /// Capitalises the first letter in a string
    ///
    /// ```rust
    /// # use swtools_utils::StringExt;
    /// assert_eq!("dead time".capitalise(), "Dead time".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Turn a human readable label into a structured field name
    ///
    /// Whitespace runs become a single underscore, everything is lowercase.
    ///
    /// ```rust
    /// # use swtools_utils::StringExt;
    /// assert_eq!("black holes".to_field_name(), "black_holes");
    /// assert_eq!(" Star  Formation ".to_field_name(), "star_formation");
    /// ```
    fn to_field_name(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(first) => first.to_uppercase().chain(c).collect(),
            None => String::new(),
        }
    }

    fn to_field_name(&self) -> String {
        self.as_ref()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<String>>()
            .join("_")
    }
}
