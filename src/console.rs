//! Line-oriented console shared by the game shells.
//!
//! Reads race the interrupt signal, so Ctrl-C while waiting for input
//! surfaces as [`ConsoleError::Interrupted`] instead of killing the process.

use derive_more::{Display, Error};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Why a console read or write did not complete.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// The user pressed Ctrl-C.
    #[display("Interrupted")]
    Interrupted,
    /// Input closed before a line arrived.
    #[display("End of input")]
    EndOfInput,
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(#[error(source)] std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Prompt/answer console over any async reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    interrupt: watch::Receiver<bool>,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(interrupt: watch::Receiver<bool>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), interrupt)
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a console. Once `interrupt` holds `true`, pending and future
    /// reads fail with [`ConsoleError::Interrupted`].
    pub fn new(input: R, output: W, interrupt: watch::Receiver<bool>) -> Self {
        Self {
            input,
            output,
            interrupt,
        }
    }

    /// Writes `text` followed by a newline.
    pub async fn say(&mut self, text: impl AsRef<str>) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    #[instrument(skip(self))]
    pub async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let Self {
            input, interrupt, ..
        } = self;
        let mut bytes = Vec::new();

        let read = tokio::select! {
            biased;
            _ = interrupted(interrupt) => {
                info!("Read interrupted");
                return Err(ConsoleError::Interrupted);
            }
            read = input.read_until(b'\n', &mut bytes) => read?,
        };

        if read == 0 {
            info!("Input closed");
            return Err(ConsoleError::EndOfInput);
        }

        // Undecodable bytes become U+FFFD and fail parsing like any other typo.
        let line = String::from_utf8_lossy(&bytes);
        debug!(line = line.trim(), "Read line");
        Ok(line.trim().to_string())
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Resolves once the flag turns `true`; never resolves if the sender is gone.
async fn interrupted(interrupt: &mut watch::Receiver<bool>) {
    if interrupt.wait_for(|flag| *flag).await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Starts listening for Ctrl-C and returns the flag it raises.
///
/// Must be called from within a tokio runtime.
pub fn interrupt_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received");
                let _ = tx.send(true);
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                // Keep the sender alive so reads are never spuriously interrupted.
                std::future::pending::<()>().await;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(script: &'static str) -> (Console<&'static [u8], Vec<u8>>, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        (Console::new(script.as_bytes(), Vec::new(), rx), tx)
    }

    #[tokio::test]
    async fn test_ask_trims_and_echoes_prompt() {
        let (mut console, _tx) = console("  hello \nworld\n");
        assert_eq!(console.ask("> ").await.unwrap(), "hello");
        assert_eq!(console.ask("> ").await.unwrap(), "world");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > ");
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let (mut console, _tx) = console("last");
        assert_eq!(console.ask("").await.unwrap(), "last");
        assert!(matches!(console.ask("").await, Err(ConsoleError::EndOfInput)));
    }

    #[tokio::test]
    async fn test_interrupt_wins_over_input() {
        let (mut console, tx) = console("rock\n");
        tx.send(true).unwrap();
        assert!(matches!(console.ask("").await, Err(ConsoleError::Interrupted)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_read_lossily() {
        let (tx, rx) = watch::channel(false);
        let mut console = Console::new(&b"\xff\xfe\nok\n"[..], Vec::new(), rx);
        assert_eq!(console.ask("").await.unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(console.ask("").await.unwrap(), "ok");
        drop(tx);
    }

    #[tokio::test]
    async fn test_interrupt_while_waiting_for_input() {
        let (tx, rx) = watch::channel(false);
        // Keep the writing half alive so the read stays pending.
        let (_keyboard, reader) = tokio::io::duplex(64);
        let mut console = Console::new(BufReader::new(reader), Vec::new(), rx);

        let press_ctrl_c = async {
            tokio::task::yield_now().await;
            tx.send(true).unwrap();
        };
        let (result, ()) = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            async { tokio::join!(console.ask("> "), press_ctrl_c) },
        )
        .await
        .expect("Interrupt ends the pending read");

        assert!(matches!(result, Err(ConsoleError::Interrupted)));
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> ");
    }

    #[tokio::test]
    async fn test_dropped_sender_never_interrupts() {
        let (mut console, tx) = console("rock\n");
        drop(tx);
        assert_eq!(console.ask("").await.unwrap(), "rock");
    }
}
