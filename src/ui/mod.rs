//! Terminal presentation. Reads session views, never mutates the game.

pub mod game_common;
pub mod game_scene;

use ratatui::{backend::Backend, Terminal};
use skyward::{Presenter, SessionView};
use std::io;

/// Draws each session view to a ratatui terminal.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B> {
    type Error = io::Error;

    fn render(&mut self, view: &SessionView<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| game_scene::render_game(frame, frame.size(), view))?;
        Ok(())
    }
}
