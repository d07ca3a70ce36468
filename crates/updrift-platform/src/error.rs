use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no per-user storage directory available")]
    NoStorageDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
