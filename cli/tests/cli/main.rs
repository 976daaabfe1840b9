mod info;
mod inflate;
pub mod utils;
