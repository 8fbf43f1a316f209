/// Milliseconds per typed character.
pub const TYPE_SPEED_MS: u32 = 100;

/// Deleting runs at twice the typing speed.
pub const DELETE_SPEED_MS: u32 = TYPE_SPEED_MS / 2;

/// Hold time on a fully typed phrase.
pub const PAUSE_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// What the driver should display after a tick, and when to tick next.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub next_tick_ms: u32,
}

/// The typing effect as an explicit state machine: phrase index, character
/// position, and phase, advanced one step per external tick. No timers of
/// its own, so a test can drive it to any point deterministically.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// Panics if `phrases` is empty; the widget is meaningless without text.
    pub fn new(phrases: Vec<String>) -> Self {
        assert!(!phrases.is_empty(), "typewriter needs at least one phrase");
        Typewriter {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Advance one step and report what to display next.
    pub fn tick(&mut self) -> Frame {
        let phrase_len = self.current_phrase().chars().count();

        match self.phase {
            Phase::Typing => {
                if self.char_index < phrase_len {
                    self.char_index += 1;
                }
                if self.char_index == phrase_len {
                    self.phase = Phase::Pausing;
                    self.frame(PAUSE_MS)
                } else {
                    self.frame(TYPE_SPEED_MS)
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.frame(DELETE_SPEED_MS)
            }
            Phase::Deleting => {
                if self.char_index > 0 {
                    self.char_index -= 1;
                }
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.frame(TYPE_SPEED_MS)
                } else {
                    self.frame(DELETE_SPEED_MS)
                }
            }
        }
    }

    fn frame(&self, next_tick_ms: u32) -> Frame {
        let text = self
            .current_phrase()
            .chars()
            .take(self.char_index)
            .collect();
        Frame { text, next_tick_ms }
    }
}
