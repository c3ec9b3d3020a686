//! Process configuration for the HTTP service.

use crate::corpus::WordCorpus;
use crate::error::CorpusError;
use crate::WORD_LENGTH;
use std::net::{Ipv6Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 6500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub word_list_path: PathBuf,
    pub word_length: usize,
}

impl ServerConfig {
    pub fn new(word_list_path: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            word_list_path: word_list_path.into(),
            word_length: WORD_LENGTH,
        }
    }

    /// Listen on every interface, IPv6 and IPv4.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, self.port))
    }

    pub fn load_corpus(&self) -> Result<WordCorpus, CorpusError> {
        WordCorpus::load(&self.word_list_path, self.word_length)
    }
}
