use std::{fs, io, path::Path};

/// Napkin source code along with a name for it in log output: the file path for scripts,
/// `<stdin>` for REPL input and inline text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            name: path.display().to_string(),
            text: fs::read_to_string(path)?,
        })
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            name: "<stdin>".into(),
            text: text.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
