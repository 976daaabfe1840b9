mod chunk_type_name;
mod log_level;

pub use self::{chunk_type_name::ChunkTypeName, log_level::LogLevel};
