//! Mesh export.

#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary};

/// Generic I/O and format‑conversion errors.
///
/// Export formats sit behind cargo feature‑flags.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedPath(String),
    Unimplemented(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

/// Output encodings the exporter can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StlEncoding {
    #[default]
    Binary,
    Ascii,
}

/// Write `shape` as an STL file at `path`.
///
/// `path` must name a file; its parent directory must already exist.
pub fn write_stl<T: crate::triangulated::Triangulated3D>(
    shape: &T,
    name: &str,
    path: &std::path::Path,
    encoding: StlEncoding,
) -> Result<(), IoError> {
    if path.file_name().is_none() {
        return Err(IoError::MalformedPath(path.display().to_string()));
    }

    #[cfg(feature = "stl-io")]
    {
        let bytes = match encoding {
            StlEncoding::Ascii => to_stl_ascii(shape, name).into_bytes(),
            StlEncoding::Binary => to_stl_binary(shape, name)?,
        };
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), ?encoding, "wrote stl");
        Ok(())
    }

    #[cfg(not(feature = "stl-io"))]
    {
        let _ = (shape, name, encoding);
        Err(IoError::Unimplemented("STL export needs the `stl-io` feature".into()))
    }
}
