use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No package.json found at `{}`.", .path)]
    ManifestNotFound { path: String },

    #[error("Error parsing manifest at `{}`: {}", .path, .original)]
    ManifestParse {
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Script selection was cancelled.")]
    UserCancelled,

    #[error("Could not start `{}`: {}", .program, .original)]
    Spawn {
        program: String,
        original: std::io::Error,
    },

    #[error("Sub process didn't give a result: {}", .0)]
    SubProcessWait(std::io::Error),

    #[error("No script named `{}` in the manifest.", .0)]
    ScriptNotFound(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn manifest_not_found(path: String) -> Self {
        Self::ManifestNotFound { path }
    }

    pub fn manifest_parse(path: String, original: serde_json::Error) -> Self {
        Self::ManifestParse { path, original }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn spawn_error(program: String, original: std::io::Error) -> Self {
        Self::Spawn { program, original }
    }
}
