use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;
use log::debug;

use located_error::LocatedError;

mod error;
pub use error::WriterError;

/// A generic report writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a>{
    /// Instantiate a new `Writer`, linked to a file, or to stdout if `path` is `None`.
    ///
    /// # Errors
    /// - if `path` already exists, and `overwrite` is false.
    /// - if `path` is either an invalid file, or the user does not have the proper
    ///   UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>, overwrite: bool) -> Result<GenericWriter<'a>>{
        use WriterError::{IOError, CannotOverwrite};
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let path = path.as_ref();
                if ! overwrite && path.exists() {
                    return Err(CannotOverwrite(path.display().to_string())).loc("While creating file")
                }
                debug!("Writing output into {}", path.display());
                let file = File::create(path).map_err(IOError).loc("While creating file")?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Write a pre-formatted block of text, as-is.
    ///
    /// # Errors
    /// - if the contents fail to get written or flushed.
    pub fn write_str(&mut self, contents: &str) -> Result<()> {
        self.source.write_all(contents.as_bytes())
            .map_err(WriterError::IOError)
            .loc("While writing contents into file")?;

        self.source.flush().loc("While flushing buffer contents of Writer")
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        iter.into_iter()
            .try_for_each(|obj| writeln!(self.source, "{obj}"))
            .map_err(WriterError::IOError)
            .loc("While writing contents into file")?;

        self.source.flush().loc("While flushing buffer contents of Writer")
    }
}
