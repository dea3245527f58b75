use crate::command::{Action, Command, CommandInner, TerminalCommand};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Paragraph, Widget},
    Terminal, TerminalOptions, Viewport,
};
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Output target for the prompt UI.
///
/// Render to [`Stderr`](OutputTarget::Stderr) when stdout is piped, so the
/// prompt reaches the terminal while the answer flows through the pipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only the fields you need:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     height: 7,
///     output: OutputTarget::Stderr,
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Rows of the inline viewport below the cursor (default: 1, at least 1).
    /// Lines printed with [`Command::println`] scroll into the terminal
    /// history above it.
    pub height: u16,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Restore the terminal before the panic message prints (default: true).
    pub catch_panics: bool,
    /// Stop on SIGINT delivered outside raw mode key handling (default: true).
    pub handle_signals: bool,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
    /// Erase the viewport when the program exits (default: true).
    pub clear_on_exit: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            height: 1,
            bracketed_paste: true,
            catch_panics: true,
            handle_signals: true,
            output: OutputTarget::default(),
            clear_on_exit: true,
        }
    }
}

/// A cloneable handle to a running [`Program`].
///
/// Background tasks use it to feed messages into the event loop, e.g. a
/// long-running job reporting progress.
#[derive(Clone)]
pub struct ProgramHandle<Msg: Send + 'static> {
    msg_tx: mpsc::UnboundedSender<Msg>,
    killed: Arc<AtomicBool>,
}

impl<Msg: Send + 'static> ProgramHandle<Msg> {
    /// Send a message to the running program.
    ///
    /// Returns silently if the program has already exited.
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Force the program to exit at the next loop iteration without
    /// processing the messages still queued.
    pub fn kill(&self) {
        self.killed.store(true, Ordering::SeqCst);
    }

    /// Whether the program has stopped receiving messages.
    pub fn is_closed(&self) -> bool {
        self.msg_tx.is_closed()
    }
}

/// The program runtime. Owns the terminal, the event loop and the [`Model`].
///
/// ```rust,ignore
/// let model = Program::<MyPrompt>::with_options(flags, options)?.run().await?;
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Output>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscription_manager: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    killed: Arc<AtomicBool>,
}

impl<M: Model> Program<M> {
    /// Create a new program with custom options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);

        let terminal = init_terminal(&options)?;
        tracing::debug!(height = options.height, fps = options.fps, "program initialized");

        let mut program = Self {
            model,
            terminal,
            subscription_manager: SubscriptionManager::new(msg_tx.clone()),
            msg_tx,
            msg_rx,
            options,
            needs_redraw: true,
            should_quit: false,
            killed: Arc::new(AtomicBool::new(false)),
        };

        program.execute_command(init_cmd)?;
        Ok(program)
    }

    /// Get a handle for external control (send messages, force-kill).
    pub fn handle(&self) -> ProgramHandle<M::Message> {
        ProgramHandle {
            msg_tx: self.msg_tx.clone(),
            killed: self.killed.clone(),
        }
    }

    /// Run the program until the model quits. Returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);

        let result = self.event_loop().await;

        tracing::debug!("shutting down");
        self.subscription_manager.shutdown();
        let teardown = self.teardown();

        result?;
        teardown?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let handle_signals = self.options.handle_signals;

        loop {
            if self.should_quit {
                return Ok(());
            }
            if self.killed.load(Ordering::SeqCst) {
                tracing::debug!("program killed");
                return Ok(());
            }

            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::debug!("received interrupt signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg)?;
                    while let Ok(msg) = self.msg_rx.try_recv() {
                        self.process_message(msg)?;
                        if self.should_quit {
                            break;
                        }
                    }

                    if self.should_quit {
                        // Draw the final state so a cleared-on-exit viewport
                        // and a kept one both end on what the model last showed.
                        self.render()?;
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) -> Result<(), ProgramError> {
        let cmd = self.model.update(msg);
        self.execute_command(cmd)?;

        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);

        self.needs_redraw = true;
        Ok(())
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) -> Result<(), ProgramError> {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Action(Action::Quit) => {
                tracing::debug!("quit requested");
                self.should_quit = true;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd)?;
                }
            }
            CommandInner::Terminal(tcmd) => self.execute_terminal_command(tcmd)?,
        }
        Ok(())
    }

    fn execute_terminal_command(&mut self, cmd: TerminalCommand) -> Result<(), ProgramError> {
        tracing::trace!(?cmd, "terminal command");
        match cmd {
            TerminalCommand::Println(line) => {
                self.terminal.insert_before(1, |buf| {
                    Paragraph::new(line).render(buf.area, buf);
                })?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), ProgramError> {
        if self.options.clear_on_exit {
            self.terminal.clear()?;
        } else {
            // Leave the last frame on screen and put the shell prompt below it.
            let area = self.terminal.get_frame().area();
            let writer = self.terminal.backend_mut();
            execute!(
                writer,
                cursor::MoveTo(0, area.bottom().saturating_sub(1)),
                Print("\r\n")
            )?;
        }

        forget_for_panic();
        restore_terminal(&self.options)
    }
}

/// Options of the program currently owning the terminal, read by the panic
/// hook. Each program replaces them on setup and clears them on teardown.
static PANIC_RESTORE: Mutex<Option<ProgramOptions>> = Mutex::new(None);

fn remember_for_panic(options: &ProgramOptions) {
    *PANIC_RESTORE.lock().unwrap_or_else(PoisonError::into_inner) = Some(options.clone());
}

fn forget_for_panic() {
    PANIC_RESTORE.lock().unwrap_or_else(PoisonError::into_inner).take();
}

fn panic_restore_options() -> Option<ProgramOptions> {
    PANIC_RESTORE.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn install_panic_hook() {
    static HOOK_INSTALLED: Once = Once::new();
    HOOK_INSTALLED.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(options) = panic_restore_options() {
                let _ = restore_terminal(&options);
            }
            original_hook(info);
        }));
    });
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Output>>, ProgramError> {
    if options.catch_panics {
        install_panic_hook();
        remember_for_panic(options);
    } else {
        forget_for_panic();
    }

    enable_raw_mode()?;
    let mut writer = Output::new(options.output);

    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    execute!(writer, cursor::Hide)?;

    let viewport = Viewport::Inline(options.height.max(1));
    let terminal = Terminal::with_options(CrosstermBackend::new(writer), TerminalOptions { viewport })?;
    Ok(terminal)
}

/// Best-effort restore: every step runs even if an earlier one failed.
fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    let raw = disable_raw_mode();
    let mut writer = Output::new(options.output);
    if options.bracketed_paste {
        execute!(writer, DisableBracketedPaste).ok();
    }
    execute!(writer, cursor::Show).ok();
    raw?;
    Ok(())
}
