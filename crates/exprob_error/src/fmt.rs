use crate::ErrorContext;
use std::fmt;

/// All the error messages use this function to print objects
pub trait RenderError {
    fn render_error(&self) -> String;
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error())
    }
}
