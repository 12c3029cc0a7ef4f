use std::path::Path;

use horn_prover::{knowledge_base::KnowledgeBase, types::err::ErrorKind};

/// Reasons a knowledge base could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(ErrorKind),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read knowledge base: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

pub fn load_kb(path: &Path) -> Result<KnowledgeBase, LoadError> {
    let text = std::fs::read_to_string(path).map_err(LoadError::Io)?;
    KnowledgeBase::parse(&text).map_err(|e| LoadError::Parse(ErrorKind::from(e)))
}

#[cfg(feature = "log")]
pub fn init_logging(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to start logging: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logging: {e}"),
    }
}
