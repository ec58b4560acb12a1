use thiserror::Error;

pub type Result<T, E = ImportError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ImportError {
    #[error("The file is neither UTF-8 nor Shift_JIS.")]
    WrongEncoding,
    #[error("The file has no `email` column.")]
    MissingEmailColumn,
}
