//! Line-based terminal front-end

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use duel_battle::{ActionRequest, Choice, Handler, Narration, RequestKind, SideId};
use tracing::{debug, warn};

/// Prompts a human for choices and prints the battle as it happens.
///
/// A line may be the option number shown in the menu or the wire form of a
/// choice (`fight`, `switch`, `move 2`, `switch 3`, `back`). Anything else is
/// rejected and the menu is shown again, so the engine only ever receives
/// legal choices.
pub struct ConsoleHandler<R, W> {
    input: R,
    output: W,

    /// Narration addressed to this side is printed, the rest ignored
    audience: SideId,

    /// Input ran out; every further menu is answered automatically
    exhausted: bool,
}

impl ConsoleHandler<StdinLock<'static>, Stdout> {
    /// Read from stdin, write to stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHandler<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            audience: SideId::Player,
            exhausted: false,
        }
    }

    /// Print narration meant for `side` instead of the player
    pub fn for_side(mut self, side: SideId) -> Self {
        self.audience = side;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, request: &ActionRequest) -> io::Result<()> {
        let title = match request.kind {
            RequestKind::Command => "choose an action",
            RequestKind::Skill => "choose a skill",
            RequestKind::Switch => "choose a creature",
            RequestKind::ForcedSwitch => "send out a creature",
        };

        writeln!(self.output, "[{}] Turn {} - {}:", request.side, request.turn, title)?;
        for (i, option) in request.options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option.label)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()
    }

    /// Next input line, or None once the input is closed
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    /// Fallback once input is gone: first option that makes progress
    fn fallback(request: &ActionRequest) -> Choice {
        request
            .choices()
            .find(|c| *c != Choice::Back)
            .unwrap_or(Choice::Back)
    }
}

/// Resolve a line of input against the offered options
fn interpret(request: &ActionRequest, line: &str) -> Option<Choice> {
    let line = line.trim();

    if let Ok(n) = line.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| request.options.get(i))
            .map(|option| option.choice);
    }

    Choice::parse(line)
        .ok()
        .filter(|choice| request.allows(choice))
}

impl<R: BufRead, W: Write> Handler for ConsoleHandler<R, W> {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        loop {
            if self.exhausted {
                return Self::fallback(request);
            }

            self.prompt(request).ok();

            let Some(line) = self.read_line() else {
                warn!(side = %request.side, "Input closed, choosing automatically");
                self.exhausted = true;
                continue;
            };

            match interpret(request, &line) {
                Some(choice) => return choice,
                None => {
                    debug!(input = line.trim(), "Rejected console input");
                    writeln!(self.output, "Invalid choice, try again.").ok();
                }
            }
        }
    }

    fn notify(&mut self, audience: SideId, narration: &Narration) {
        if audience != self.audience {
            return;
        }
        writeln!(self.output, "{}", narration).ok();
    }
}
