#![deny(unused_imports)]

use colored::Colorize;

mod ctxt;
mod fmt;


pub use ctxt::ErrorContext;
pub use fmt::RenderError;

pub trait ExprobError<K: ExprobErrorKind> {
    fn err_kind(&self) -> &K;

    fn context(&self) -> ErrorContext;

    /// Errors from different crates have different indices.
    /// For example, ratio errors and measure errors have different ones.
    fn index(&self) -> u32;

    fn error_code(&self) -> u32 {
        self.index() * 100 + self.err_kind().index()
    }

    fn render_error(&self) -> String {
        let kind = self.err_kind();
        let help = match kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };

        format!(
            "E{:04}: {}{help}",
            self.error_code(),
            kind.msg(),
        )
    }

    /// Same as `render_error`, but with a colored title.
    /// Use this only when the output is a terminal.
    fn render_colored(&self) -> String {
        format!(
            "{}\n{}",
            render_error_title(self.context()),
            self.render_error(),
        )
    }
}

pub trait ExprobErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    fn msg(&self) -> String;

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    fn help(&self) -> String;

    /// identifier of this errkind
    fn index(&self) -> u32;
}

pub(crate) fn render_error_title(context: ErrorContext) -> String {
    let context = match context.render_error() {
        s if s.is_empty() => String::new(),
        s => format!(" while {s}"),
    };

    format!("[Error{context}]").red().bold().to_string()
}
