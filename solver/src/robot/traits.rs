use crate::maze::{Direction, Position};

/// visual annotations; calls are fire-and-forget and must be idempotent
pub trait RenderSink {
    fn set_wall(&self, cell: Position, side: Direction);

    fn set_text(&self, cell: Position, text: &str);
}

/// the mouse as seen from the controller. wall queries are relative to the current heading
#[allow(async_fn_in_trait)]
pub trait Robot {
    async fn wall_front(&self) -> eyre::Result<bool>;

    async fn wall_left(&self) -> eyre::Result<bool>;

    async fn wall_right(&self) -> eyre::Result<bool>;

    /// returns false when the mouse crashed into a wall
    async fn move_forward(&self) -> eyre::Result<bool>;

    async fn turn_left(&self) -> eyre::Result<()>;

    async fn turn_right(&self) -> eyre::Result<()>;

    async fn was_reset(&self) -> eyre::Result<bool> {
        Ok(false)
    }

    async fn ack_reset(&self) -> eyre::Result<()> {
        Ok(())
    }
}
