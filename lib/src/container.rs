mod read;

pub use self::read::ContainerReader;
use crate::{
    chunk::{Chunk, ChunkType, RawChunk},
    decompress::decompress_chunks,
    error::{Error, Result},
    header::ImageHeader,
    options::ReadOptions,
};

/// Progress of a container through the chunk stream.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum ReadState {
    /// The terminal chunk has not been seen yet.
    #[default]
    Reading,
    /// The terminal chunk has been appended.
    Done,
}

/// A decoded chunk stream.
///
/// Chunks borrow their data from the source buffer, so the buffer outlives
/// the container. Chunks are kept in file order and can only be appended
/// until the terminal chunk arrives.
#[derive(Clone, Debug)]
pub struct Container<'d> {
    options: ReadOptions,
    header: Option<ImageHeader>,
    chunks: Vec<RawChunk<&'d [u8]>>,
    state: ReadState,
}

impl Default for Container<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Container<'d> {
    /// Creates an empty container using the default [`ReadOptions`].
    #[inline]
    pub fn new() -> Self {
        Self::with_options(ReadOptions::default())
    }

    /// Creates an empty container.
    ///
    /// `options` decides the terminal and payload chunk types and how the
    /// header is validated.
    #[inline]
    pub fn with_options(options: ReadOptions) -> Self {
        Self {
            options,
            header: None,
            chunks: Vec::new(),
            state: ReadState::Reading,
        }
    }

    /// Reads a chunk stream that starts right after the signature.
    ///
    /// The signature bytes themselves are not checked, see
    /// [`Container::read_png`] for that.
    #[inline]
    pub fn read_from_slice(bytes: &'d [u8], options: ReadOptions) -> Result<Self> {
        ContainerReader::new(bytes, options).read_to_end()
    }

    /// Checks the signature, then reads the chunk stream that follows.
    ///
    /// # Examples
    /// ```no_run
    /// use libpngwalk::{Container, ReadOptions};
    ///
    /// let bytes = std::fs::read("image.png").unwrap();
    /// let container = Container::read_png(&bytes, ReadOptions::default()).unwrap();
    /// let header = container.header().unwrap();
    /// println!("{}x{}", header.width(), header.height());
    /// let pixels = container.decompress_payload().unwrap();
    /// ```
    #[inline]
    pub fn read_png(bytes: &'d [u8], options: ReadOptions) -> Result<Self> {
        crate::header::read_signature(bytes)?;
        Self::read_from_slice(bytes, options)
    }

    /// Appends a chunk. Appending the terminal chunk completes the container.
    ///
    /// # Errors
    ///
    /// [`Error::ContainerComplete`] once the terminal chunk has been appended.
    pub fn append(&mut self, chunk: RawChunk<&'d [u8]>) -> Result<()> {
        if self.state == ReadState::Done {
            return Err(Error::ContainerComplete);
        }
        if chunk.ty() == self.options.terminal_type {
            log::debug!("terminal chunk `{}` after {} chunk(s)", chunk.ty(), self.chunks.len());
            self.state = ReadState::Done;
        }
        self.chunks.push(chunk);
        Ok(())
    }

    /// Validates `chunk` as the header and commits its fields.
    ///
    /// Either all header fields are committed or none are.
    ///
    /// # Errors
    ///
    /// Any header validation error, or [`Error::HeaderAlreadySet`] when a
    /// header was committed earlier.
    pub fn validate_header<C: Chunk>(&mut self, chunk: C) -> Result<()> {
        if self.header.is_some() {
            return Err(Error::HeaderAlreadySet);
        }
        let header = ImageHeader::try_from_chunk(chunk, &self.options)?;
        log::debug!("header: {header:?}");
        self.header = Some(header);
        Ok(())
    }

    /// The validated header, if one has been committed.
    #[inline]
    pub const fn header(&self) -> Option<&ImageHeader> {
        self.header.as_ref()
    }

    /// All chunks in file order.
    #[inline]
    pub fn chunks(&self) -> &[RawChunk<&'d [u8]>] {
        &self.chunks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[inline]
    pub const fn state(&self) -> ReadState {
        self.state
    }

    /// Returns `true` once the terminal chunk has been appended.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == ReadState::Done
    }

    #[inline]
    pub const fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Chunks of type `ty`, in file order.
    #[inline]
    pub fn chunks_of(&self, ty: ChunkType) -> impl Iterator<Item = &RawChunk<&'d [u8]>> {
        self.chunks.iter().filter(move |c| c.ty() == ty)
    }

    /// Chunks carrying the compressed payload, in file order.
    #[inline]
    pub fn payload_chunks(&self) -> impl Iterator<Item = &RawChunk<&'d [u8]>> {
        self.chunks_of(self.options.payload_type)
    }

    /// Total compressed payload size in bytes.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.payload_chunks().map(|c| c.data().len()).sum()
    }

    /// Concatenates the data of all payload chunks in order and inflates it.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPayload`] when there is no payload chunk,
    /// [`Error::DecompressionFailed`] when the payload is not a valid zlib
    /// stream.
    pub fn decompress_payload(&self) -> Result<Vec<u8>> {
        let ty = self.options.payload_type;
        let count = self.payload_chunks().count();
        if count == 0 {
            return Err(Error::MissingPayload { ty });
        }
        log::debug!(
            "decompressing {count} `{ty}` chunk(s), {} byte(s)",
            self.payload_len()
        );
        decompress_chunks(self.payload_chunks())
    }
}
