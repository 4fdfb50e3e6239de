pub mod server;

pub use server::{ArchiveServer, SERVER_INSTRUCTIONS};
