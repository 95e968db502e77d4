use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// Everything that can stop an organize run.
///
/// Every variant is fatal: the run stops at the first failure and whatever was
/// already created or moved stays where it is.
#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    /// The target directory could not be listed.
    #[error("list directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A group folder could not be created.
    #[error("create folder {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be moved into its group folder.
    #[error("move {} to {}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    /// The underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            OrganizeError::ListDir { source, .. }
            | OrganizeError::CreateDir { source, .. }
            | OrganizeError::Move { source, .. } => source,
        }
    }
}

impl miette::Diagnostic for OrganizeError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self {
            OrganizeError::ListDir { .. } => "simfold::list_dir",
            OrganizeError::CreateDir { .. } => "simfold::create_dir",
            OrganizeError::Move { .. } => "simfold::move",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let help = match self.io_error().kind() {
            io::ErrorKind::NotFound => match self {
                OrganizeError::ListDir { .. } => "check that the directory exists",
                _ => "the directory changed while it was being organized",
            },
            io::ErrorKind::PermissionDenied => "check the permissions on the directory",
            io::ErrorKind::AlreadyExists => {
                "an entry with the same name is already in the destination folder"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
