use std::collections::HashSet;

/// Total animation duration.
pub const DURATION_MS: u32 = 2000;

/// Interval between animation steps.
pub const STEP_MS: u32 = 50;

/// Count-up animation for one stat badge, driven by an external tick every
/// [`STEP_MS`] milliseconds. The displayed value is the floor of the running
/// total until the target is reached.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        let steps = (DURATION_MS / STEP_MS) as f64;
        CounterAnimation {
            target,
            step: target as f64 / steps,
            current: 0.0,
            done: target == 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step and return the value to display.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.target;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.current as u64
        }
    }
}

/// Guard that lets each badge animate at most once, keyed by badge id.
#[derive(Debug, Default)]
pub struct AnimatedSet {
    seen: HashSet<String>,
}

impl AnimatedSet {
    /// True the first time a badge id is offered, false afterwards.
    pub fn begin(&mut self, id: &str) -> bool {
        self.seen.insert(id.to_string())
    }
}
