use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("{0}: empty file, expected a header line")]
    EmptyInput(String),

    #[error("process returned code: {0}. Abort.")]
    CommandFailed(i32),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Read(..) => "READ_ERROR",
            Error::EmptyInput(_) => "EMPTY_INPUT",
            Error::CommandFailed(_) => "COMMAND_FAILED",
        }
    }

    /// Process exit code for this error class.
    ///
    /// A failing row command exits 1; input errors exit 2, leaving 1
    /// unambiguous for "a command failed and the loop aborted".
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CommandFailed(_) => 1,
            Error::Read(..) | Error::EmptyInput(_) => 2,
        }
    }
}
