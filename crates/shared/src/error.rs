/// Failure classes for a backend exchange. Every error a front-end surfaces
/// carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-2xx response status.
    Http,
    /// 2xx response whose body carries a failure marker.
    Application,
    /// Rejected before any network call was issued.
    Validation,
    /// Network failure or a body that did not decode.
    Transport,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Http => "HTTP",
            ErrorKind::Application => "Application",
            ErrorKind::Validation => "Validation",
            ErrorKind::Transport => "Transport",
        }
    }
}
