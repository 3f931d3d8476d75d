//! Appender over any `io::Write`

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes lines to an arbitrary writer (socket, pipe, `Vec<u8>`, ...)
pub struct WriterAppender {
    writer: Box<dyn Write + Send>,
    name: String,
}

impl WriterAppender {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named<W: Write + Send + 'static>(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            name: name.into(),
        }
    }
}

impl Appender for WriterAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let mut appender = WriterAppender::named("pipe", BrokenPipe);
        assert!(appender.append("lost").is_err());
        assert_eq!(appender.name(), "pipe");
    }

    #[test]
    fn test_writes_lines() {
        let mut appender = WriterAppender::new(io::sink());
        appender.append("line").expect("sink accepts everything");
        appender.flush().expect("sink flush");
    }
}
