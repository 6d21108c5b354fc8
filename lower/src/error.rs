use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A pass hit a condition it cannot transform through. The sequence is
    /// left in an unspecified state and the pipeline stops.
    #[snafu(display("pass `{pass}` failed: {message}"))]
    PassFailed { pass: &'static str, message: String },
}
