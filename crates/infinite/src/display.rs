//! Shared plumbing behind every `display` entry point.

use crate::error::InfError;
use crate::startup::StartUp;
use infinite_core::{OutputTarget, Program, ProgramOptions};
use infinite_widgets::Prompt;

/// Runtime options for a prompt that needs `height` rows.
pub(crate) fn program_options(height: u16, output: OutputTarget) -> ProgramOptions {
    ProgramOptions {
        height: height.max(1),
        output,
        ..ProgramOptions::default()
    }
}

/// Set up the terminal for `prompt` without starting the loop.
pub(crate) fn program<P: Prompt>(
    prompt: P,
    output: OutputTarget,
) -> Result<Program<StartUp<P>>, InfError> {
    let options = program_options(prompt.height(), output);
    Ok(Program::with_options(prompt, options)?)
}

/// Run `prompt` until it finishes and take its answer.
pub(crate) async fn run_prompt<P: Prompt>(
    prompt: P,
    output: OutputTarget,
) -> Result<Option<P::Output>, InfError> {
    let mut startup = program(prompt, output)?.run().await?;
    Ok(startup.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_viewport_uses_height() {
        let opts = program_options(7, OutputTarget::Stderr);
        assert_eq!(opts.height, 7);
        assert_eq!(opts.output, OutputTarget::Stderr);
        assert!(opts.clear_on_exit);
    }

    #[test]
    fn zero_height_still_gets_a_row() {
        assert_eq!(program_options(0, OutputTarget::Stdout).height, 1);
    }
}
