//! Input/output abstractions
//!
//! The console loop talks to the player only through these traits, so it
//! can be driven by scripted input in tests. `PacedWriter` reproduces the
//! teletype feel of the old terminals by throttling characters per second.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Trait for reading user input
pub trait InputReader {
    /// Read one line. End of input is an `UnexpectedEof` error.
    fn read_line(&mut self) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
    /// Push buffered output to the player, reporting any write failure.
    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self) -> Result<String, io::Error> {
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        io::stdout().flush()
    }
}

pub const DEFAULT_CPS: u32 = 30;
pub const MIN_CPS: u32 = 1;
pub const MAX_CPS: u32 = 200;

/// Writer that emits at most `cps` characters per second.
///
/// Carriage returns pass through unthrottled and every newline is flushed
/// immediately. The first write error is kept and returned from `flush`.
pub struct PacedWriter<W: Write> {
    inner: W,
    interval: Duration,
    next: Instant,
    error: Option<io::Error>,
}

impl<W: Write> PacedWriter<W> {
    /// `cps` is clamped to [`MIN_CPS`, `MAX_CPS`].
    pub fn new(inner: W, cps: u32) -> Self {
        let cps = cps.clamp(MIN_CPS, MAX_CPS);
        PacedWriter {
            inner,
            interval: Duration::from_secs(1) / cps,
            next: Instant::now(),
            error: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn throttle(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
        }
        let now = Instant::now();
        if now > self.next {
            self.next = now;
        }
        self.next += self.interval;
    }

    fn emit(&mut self, c: char) {
        if self.error.is_some() {
            return;
        }
        if c != '\r' {
            self.throttle();
        }
        let mut buf = [0u8; 4];
        let mut result = self.inner.write_all(c.encode_utf8(&mut buf).as_bytes());
        if result.is_ok() && c == '\n' {
            result = self.inner.flush();
        }
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

impl<W: Write> OutputWriter for PacedWriter<W> {
    fn write(&mut self, message: &str) {
        for c in message.chars() {
            self.emit(c);
        }
    }

    fn writeln(&mut self, message: &str) {
        self.write(message);
        self.emit('\n');
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.inner.flush()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Mock input reader for testing
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self) -> Result<String, io::Error> {
            self.responses
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "No more mock responses"))
        }
    }

    /// Mock output writer for testing
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl Default for MockOutput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self {
                messages: Vec::new(),
            }
        }

        /// Everything written so far, as one string.
        pub fn transcript(&self) -> String {
            self.messages.concat()
        }
    }

    impl OutputWriter for MockOutput {
        fn write(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cps_is_clamped() {
        assert_eq!(PacedWriter::new(Vec::new(), 0).interval(), Duration::from_secs(1));
        assert_eq!(
            PacedWriter::new(Vec::new(), 10_000).interval(),
            Duration::from_secs(1) / MAX_CPS
        );
    }

    #[test]
    fn paced_writer_passes_text_through() {
        let mut writer = PacedWriter::new(Vec::new(), MAX_CPS);
        writer.write("OK");
        writer.writeln("\r!");
        writer.flush().unwrap();
        assert_eq!(writer.into_inner(), b"OK\r!\n".to_vec());
    }

    #[test]
    fn write_errors_surface_on_flush() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = PacedWriter::new(Broken, MAX_CPS);
        writer.writeln("lost");
        let err = writer.flush().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
