pub use anyhow::{Result, Context};
