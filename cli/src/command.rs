pub mod chunk;
mod commons;
pub mod info;
pub mod inflate;

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}
