//! Console confirmation prompt

use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::application::{ApplicationError, Confirmation};

const HEADER: &str = "Going to create/update the following directories:";
const PROMPT: &str = "Enter to continue, ctrl-C to cancel";

/// Lists the target directories and waits for a line of input.
///
/// Any line, empty or not, confirms. End of input cancels. Ctrl-C is left to the default
/// signal handling and terminates the process before anything is written.
pub struct ConsoleConfirmation<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl ConsoleConfirmation<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

#[async_trait]
impl<R, W> Confirmation for ConsoleConfirmation<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&self, targets: &[String]) -> Result<bool, ApplicationError> {
        let mut output = self.output.lock().await;
        let message = format!("{HEADER}\n{}\n{PROMPT}", targets.join(", "));
        output.write_all(message.as_bytes()).await?;
        output.flush().await?;

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            output.write_all(b"\n").await?;
            output.flush().await?;
            debug!("Confirmation input closed");
            return Ok(false);
        }
        Ok(true)
    }
}

/// Confirms without asking, for `--yes`
pub struct AssumeYes;

#[async_trait]
impl Confirmation for AssumeYes {
    async fn confirm(&self, targets: &[String]) -> Result<bool, ApplicationError> {
        info!("Creating/updating without confirmation: {}", targets.join(", "));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn targets() -> Vec<String> {
        vec!["stm32f4/".to_string(), "stm32l0/".to_string()]
    }

    #[tokio::test]
    async fn test_enter_confirms() {
        let prompt = ConsoleConfirmation::new(&b"\n"[..], Vec::new());
        assert!(prompt.confirm(&targets()).await.unwrap());

        let printed = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(
            printed,
            "Going to create/update the following directories:\n\
             stm32f4/, stm32l0/\n\
             Enter to continue, ctrl-C to cancel"
        );
    }

    #[tokio::test]
    async fn test_any_text_confirms() {
        let prompt = ConsoleConfirmation::new(&b"no\n"[..], Vec::new());
        assert!(prompt.confirm(&targets()).await.unwrap());
    }

    #[tokio::test]
    async fn test_end_of_input_cancels() {
        let prompt = ConsoleConfirmation::new(&b""[..], Vec::new());
        assert!(!prompt.confirm(&targets()).await.unwrap());
    }

    #[tokio::test]
    async fn test_no_targets_still_prompts() {
        let prompt = ConsoleConfirmation::new(&b"\n"[..], Vec::new());
        assert!(prompt.confirm(&[]).await.unwrap());

        let printed = String::from_utf8(prompt.into_output()).unwrap();
        assert!(printed.starts_with("Going to create/update the following directories:\n\n"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_assume_yes_logs_targets() {
        assert!(AssumeYes.confirm(&targets()).await.unwrap());
        assert!(logs_contain("stm32f4/, stm32l0/"));
    }
}
