use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin},
    sync::{Mutex, mpsc},
};

use super::types::{Color, Command, MoveResponse, parse_ack, parse_bool, parse_dimension};
use crate::{
    maze::{Direction, GOAL_CELLS, MAZE_SIZE, Position},
    robot::{RenderSink, Robot},
};

/// speaks the mms simulator protocol: commands go to the writer, replies come from the reader
pub struct MmsInterface<R> {
    command_tx: mpsc::UnboundedSender<String>,
    responses: Mutex<Lines<R>>,
}

impl MmsInterface<BufReader<Stdin>> {
    /// the binding mms expects: commands on stdout, replies on stdin
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R> MmsInterface<R> {
    fn send(&self, command: Command) {
        let line = command.to_string();
        log::trace!("> {}", line);
        if self.command_tx.send(line).is_err() {
            log::warn!("command writer is gone, dropping {:?}", command);
        }
    }
}

impl<R: AsyncBufRead + Unpin> MmsInterface<R> {
    /// must be called from within a tokio runtime
    pub fn new<W>(reader: R, mut writer: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<String>();

        tokio::task::spawn(async move {
            log::debug!("command writer started");
            while let Some(line) = command_rx.recv().await {
                if let Err(e) = write_line(&mut writer, &line).await {
                    log::error!("failed to write to simulator: {}", e);
                    break;
                }
            }
            log::debug!("command writer stopped");
        });

        Self {
            command_tx,
            responses: Mutex::new(reader.lines()),
        }
    }

    /// checks the maze size and marks the goal block
    pub async fn init(&self) -> eyre::Result<()> {
        let width = parse_dimension(&self.request(Command::MazeWidth).await?)?;
        let height = parse_dimension(&self.request(Command::MazeHeight).await?)?;

        if width != MAZE_SIZE || height != MAZE_SIZE {
            eyre::bail!(
                "simulator maze is {}x{}, only {}x{} is supported",
                width,
                height,
                MAZE_SIZE,
                MAZE_SIZE
            );
        }

        self.send(Command::ClearAllText);
        for cell in GOAL_CELLS {
            self.send(Command::SetColor {
                cell,
                color: Color::Green,
            });
        }

        Ok(())
    }

    async fn request(&self, command: Command) -> eyre::Result<String> {
        debug_assert!(command.expects_response());

        // hold the reader across the send so replies cannot be paired with the wrong query
        let mut responses = self.responses.lock().await;
        let name = command.to_string();
        self.send(command);

        let Some(line) = responses.next_line().await? else {
            eyre::bail!("simulator closed stdin while waiting for {}", name);
        };
        log::trace!("< {}", line);
        Ok(line)
    }
}

impl<R: AsyncBufRead + Unpin> Robot for MmsInterface<R> {
    async fn wall_front(&self) -> eyre::Result<bool> {
        parse_bool(&self.request(Command::WallFront).await?)
    }

    async fn wall_left(&self) -> eyre::Result<bool> {
        parse_bool(&self.request(Command::WallLeft).await?)
    }

    async fn wall_right(&self) -> eyre::Result<bool> {
        parse_bool(&self.request(Command::WallRight).await?)
    }

    async fn move_forward(&self) -> eyre::Result<bool> {
        let response = MoveResponse::try_from(self.request(Command::MoveForward).await?.as_str())?;
        Ok(response == MoveResponse::Ack)
    }

    async fn turn_left(&self) -> eyre::Result<()> {
        parse_ack(&self.request(Command::TurnLeft).await?)
    }

    async fn turn_right(&self) -> eyre::Result<()> {
        parse_ack(&self.request(Command::TurnRight).await?)
    }

    async fn was_reset(&self) -> eyre::Result<bool> {
        parse_bool(&self.request(Command::WasReset).await?)
    }

    async fn ack_reset(&self) -> eyre::Result<()> {
        parse_ack(&self.request(Command::AckReset).await?)
    }
}

impl<R> RenderSink for MmsInterface<R> {
    fn set_wall(&self, cell: Position, side: Direction) {
        self.send(Command::SetWall { cell, side });
    }

    fn set_text(&self, cell: Position, text: &str) {
        self.send(Command::SetText {
            cell,
            text: text.to_string(),
        });
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
