use crate::RenderError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorContext {
    Unknown,
    ConstructingRatio,
    DividingRatio,
    QueryingProbability,
    QueryingEvent,
    Sampling,
}

impl RenderError for ErrorContext {
    fn render_error(&self) -> String {
        match self {
            ErrorContext::Unknown => "",
            ErrorContext::ConstructingRatio => "constructing a ratio",
            ErrorContext::DividingRatio => "dividing a ratio",
            ErrorContext::QueryingProbability => "querying the probability of a sample point",
            ErrorContext::QueryingEvent => "querying the probability of an event",
            ErrorContext::Sampling => "sampling from a probability measure",
        }.to_string()
    }
}
