use crate::command::{Action, Command, CommandInner, TerminalCommand};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::text::Line;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Messages go straight to [`Model::update`]. Follow-up messages from
/// [`Command::message`] are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages); quit requests and printed
/// lines are recorded so tests can assert on them.
///
/// ```rust,ignore
/// let mut prog = TestProgram::<StartUp<Selection>>::new(selection);
/// prog.send(key(KeyCode::Enter));
/// assert!(prog.quit_requested());
/// assert_eq!(prog.printed(), ["? Pick one: banana"]);
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
    printed: Vec<Line<'static>>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
            printed: Vec::new(),
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued follow-up messages until none are left.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the harness and return the model, like [`Program::run`](crate::Program::run).
    pub fn into_model(self) -> M {
        self.model
    }

    /// Whether any update so far returned a quit command.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Lines printed above the viewport, as plain text.
    pub fn printed(&self) -> Vec<String> {
        self.printed.iter().map(ToString::to_string).collect()
    }

    /// Render the model into a [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return its rows joined by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            CommandInner::Terminal(TerminalCommand::Println(line)) => self.printed.push(line),
        }
    }
}

/// Flatten a buffer into rows of cell symbols joined by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
