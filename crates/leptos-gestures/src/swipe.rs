//! Swipe-to-Reveal State Machine
//!
//! Per-row horizontal swipe that reveals a trailing action (delete).
//! Rests only at `0` (closed) or `-reveal_width` (open).

/// Tuning for one kind of swipeable row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Movement needed before the gesture axis is decided
    pub dead_zone: f64,
    /// Furthest the content may be dragged to the left
    pub max_offset: f64,
    /// Released at or beyond this (negative) offset snaps open
    pub snap_threshold: f64,
    /// Resting width of the revealed action
    pub reveal_width: f64,
    /// A tap while the offset is below this closes the row instead of acting
    pub tap_close_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            dead_zone: 5.0,
            max_offset: 120.0,
            snap_threshold: -40.0,
            reveal_width: 80.0,
            tap_close_threshold: -10.0,
        }
    }
}

impl SwipeConfig {
    pub fn with_reveal_width(mut self, reveal_width: f64) -> Self {
        self.reveal_width = reveal_width;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    /// Touching, axis not decided yet
    Undecided { start_x: f64, start_y: f64 },
    /// Horizontal swipe; content follows the finger
    Tracking { start_x: f64, base: f64 },
    /// Vertical scroll won; ignore the rest of this touch
    Ceded,
}

/// Where the row came to rest after a release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeRest {
    Closed,
    Open,
}

/// What a tap on the row content should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Row was open; it closed and the primary action must not run
    Closed,
    /// Row was closed; run the primary action
    Primary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeRow {
    config: SwipeConfig,
    offset: f64,
    gesture: Gesture,
}

impl SwipeRow {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            gesture: Gesture::Idle,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_open(&self) -> bool {
        self.offset < self.config.tap_close_threshold
    }

    /// True while the content is following the finger (no snap animation)
    pub fn is_tracking(&self) -> bool {
        matches!(self.gesture, Gesture::Tracking { .. })
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        // A previous touch that never ended must not leave the row mid-way
        if self.is_tracking() {
            self.snap();
        }
        self.gesture = Gesture::Undecided { start_x: x, start_y: y };
    }

    /// Feed a touch position. Returns true when the row owns this movement
    /// (the caller should then stop the page from scrolling).
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        match self.gesture {
            Gesture::Undecided { start_x, start_y } => {
                let dx = x - start_x;
                let dy = y - start_y;
                if dx.abs().max(dy.abs()) <= self.config.dead_zone {
                    return false;
                }
                if dx.abs() > dy.abs() {
                    self.gesture = Gesture::Tracking {
                        start_x,
                        base: self.offset,
                    };
                    self.offset = self.clamp(self.offset + dx);
                    true
                } else {
                    self.gesture = Gesture::Ceded;
                    false
                }
            }
            Gesture::Tracking { start_x, base } => {
                self.offset = self.clamp(base + (x - start_x));
                true
            }
            Gesture::Idle | Gesture::Ceded => false,
        }
    }

    /// Finish the touch. Returns the resting state when a swipe was tracked.
    pub fn touch_end(&mut self) -> Option<SwipeRest> {
        let was_tracking = self.is_tracking();
        self.gesture = Gesture::Idle;
        if !was_tracking {
            return None;
        }
        Some(self.snap())
    }

    /// The browser took the touch away (system gesture, scroller, second finger).
    /// Settles the same way a release does.
    pub fn touch_cancel(&mut self) -> Option<SwipeRest> {
        self.touch_end()
    }

    pub fn tap(&mut self) -> TapOutcome {
        if self.is_open() {
            self.close();
            TapOutcome::Closed
        } else {
            TapOutcome::Primary
        }
    }

    pub fn close(&mut self) {
        self.offset = 0.0;
        self.gesture = Gesture::Idle;
    }

    fn snap(&mut self) -> SwipeRest {
        if self.offset <= self.config.snap_threshold {
            self.offset = -self.config.reveal_width;
            SwipeRest::Open
        } else {
            self.offset = 0.0;
            SwipeRest::Closed
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(-self.config.max_offset, 0.0)
    }
}
