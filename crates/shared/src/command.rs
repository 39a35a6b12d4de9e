#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("headcount must be between 1 and 10, got {0}")]
    InvalidHeadcount(u8),

    #[error("meal '{meal}' has invalid default servings {servings}")]
    InvalidServings { meal: String, servings: i64 },

    #[error("catalogue store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        impl From<sqlx::Error> for Error {
            fn from(value: sqlx::Error) -> Self {
                Self::Unknown(value.into())
            }
        }
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
