//! The driver model that runs a single prompt widget to completion.

use infinite_core::{terminal_events, Command, Component, Model, Subscription};
use infinite_widgets::{Prompt, Status};
use ratatui::Frame;

/// Owns one [`Prompt`] and feeds it terminal events until it finishes.
///
/// Once the prompt reaches a terminal state the driver prints the prompt's
/// summary line above the viewport and quits. All subscriptions, including
/// the terminal event stream, are dropped at that point.
pub struct StartUp<P: Prompt> {
    prompt: P,
}

impl<P: Prompt> StartUp<P> {
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Take the answer out of the finished prompt.
    pub fn outcome(&mut self) -> Option<P::Output> {
        self.prompt.outcome()
    }

    fn finish(&self, cmd: Command<P::Message>) -> Command<P::Message> {
        let status = self.prompt.status();
        match status {
            Status::Submitted => tracing::debug!("prompt submitted"),
            _ => tracing::debug!(?status, "prompt cancelled"),
        }
        let summary = match self.prompt.summary() {
            Some(line) => Command::println(line),
            None => Command::none(),
        };
        Command::batch([cmd, summary, Command::quit()])
    }
}

impl<P: Prompt> Model for StartUp<P> {
    type Message = P::Message;
    type Flags = P;

    fn init(prompt: P) -> (Self, Command<P::Message>) {
        let model = StartUp { prompt };
        // Already finished prompts, e.g. a progress bar told to finish
        // before the loop starts, quit on the first frame.
        let cmd = if model.prompt.is_finished() {
            model.finish(Command::none())
        } else {
            Command::none()
        };
        (model, cmd)
    }

    fn update(&mut self, msg: P::Message) -> Command<P::Message> {
        if self.prompt.is_finished() {
            return Command::none();
        }
        let cmd = self.prompt.update(msg);
        if self.prompt.is_finished() {
            self.finish(cmd)
        } else {
            cmd
        }
    }

    fn view(&self, frame: &mut Frame) {
        self.prompt.view(frame, frame.area());
    }

    fn subscriptions(&self) -> Vec<Subscription<P::Message>> {
        if self.prompt.is_finished() {
            return vec![];
        }
        let mut subs = self.prompt.subscriptions();
        subs.push(terminal_events(P::map_event));
        subs
    }
}
