//! Shell Session
//!
//! Reads commands line by line and writes one reply per command.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::cache::SharedCache;
use crate::error::Result;
use crate::shell::{execute, Command, Reply};

/// Runs commands from `reader` until EOF or `quit`.
///
/// Bad input is answered with `ERR <message>` and the session continues.
/// Only I/O failures on the streams end it with an error.
pub async fn run_session<R, W>(
    reader: R,
    mut writer: W,
    cache: &SharedCache<String, String>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line, e);
                writer.write_all(format!("ERR {}\n", e).as_bytes()).await?;
                continue;
            }
        };

        debug!("Executing {:?}", command);
        let reply = match execute(command, cache).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Command failed: {}", e);
                writer.write_all(format!("ERR {}\n", e).as_bytes()).await?;
                continue;
            }
        };

        writer.write_all(format!("{}\n", reply).as_bytes()).await?;
        if reply == Reply::Quit {
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}
