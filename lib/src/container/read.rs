use crate::{
    chunk::{Chunk, ChunkReader},
    container::{Container, ReadState},
    error::{Error, Result},
    header::SIGNATURE_LEN,
    options::ReadOptions,
};

/// Drives a [`ChunkReader`] over a buffer, feeding each chunk into a
/// [`Container`] until the terminal chunk has been read.
///
/// The first chunk must be the header chunk; it is validated before it is
/// appended. Any error ends the read.
///
/// ```
/// use libpngwalk::{ContainerReader, ReadOptions};
///
/// // signature (unchecked) followed by nothing
/// let bytes = [0u8; 8];
/// let mut reader = ContainerReader::new(&bytes, ReadOptions::default());
/// assert!(reader.step().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ContainerReader<'d> {
    reader: ChunkReader<'d>,
    container: Container<'d>,
}

impl<'d> ContainerReader<'d> {
    /// Creates a reader whose cursor is positioned just past the signature.
    #[inline]
    pub fn new(bytes: &'d [u8], options: ReadOptions) -> Self {
        Self::with_cursor(bytes, SIGNATURE_LEN, options)
    }

    /// Creates a reader whose cursor is positioned at `cursor`.
    #[inline]
    pub fn with_cursor(bytes: &'d [u8], cursor: usize, options: ReadOptions) -> Self {
        Self {
            reader: ChunkReader::new(bytes, cursor),
            container: Container::with_options(options),
        }
    }

    /// Current byte offset into the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.reader.position()
    }

    #[inline]
    pub const fn state(&self) -> ReadState {
        self.container.state()
    }

    /// The container built so far.
    #[inline]
    pub const fn container(&self) -> &Container<'d> {
        &self.container
    }

    /// Reads and appends one chunk.
    ///
    /// Returns the state after the chunk was appended. Calling this after
    /// [`ReadState::Done`] fails with [`Error::ContainerComplete`].
    pub fn step(&mut self) -> Result<ReadState> {
        if self.container.is_complete() {
            return Err(Error::ContainerComplete);
        }
        let options = self.container.options();
        let chunk = self.reader.read_chunk()?;
        if options.verify_crc() {
            chunk.verify_crc()?;
        }
        if self.container.is_empty() {
            if chunk.ty() != options.header_type() {
                return Err(Error::MissingHeader { found: chunk.ty() });
            }
            self.container.validate_header(&chunk)?;
        }
        self.container.append(chunk)?;
        Ok(self.container.state())
    }

    /// Steps until the terminal chunk has been appended and returns the
    /// finished container.
    pub fn read_to_end(mut self) -> Result<Container<'d>> {
        while self.step()? == ReadState::Reading {}
        let trailing = self.reader.remaining().len();
        if trailing != 0 {
            log::debug!("ignoring {trailing} byte(s) after terminal chunk");
        }
        log::debug!(
            "read {} chunk(s), {} byte(s)",
            self.container.len(),
            self.reader.position()
        );
        Ok(self.container)
    }

    /// Returns the container built so far, complete or not.
    #[inline]
    pub fn into_container(self) -> Container<'d> {
        self.container
    }
}
