//! The input state machine: encoder motion and button presses to state
//! edits and screen selection.

use ondas_core::{MenuMode, Scale, SynthState, Waveform};

/// A press is accepted as short when more than this many milliseconds have
/// passed since the last accepted press; anything quicker is contact
/// bounce and is dropped.
pub const SHORT_PRESS_MS: u32 = 300;

/// A press this long after the last accepted press registers as long.
pub const LONG_PRESS_MS: u32 = 1000;

/// Classification of the button level against the debounce thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Press {
    /// Button released, or inside the debounce window.
    None,
    /// Accepted press, 300–1000 ms after the previous one.
    Short,
    /// Accepted press more than 1000 ms after the previous one.
    Long,
}

/// Interaction context. Which screen is drawn is [`SynthState`]'s
/// `current_mode`; this is where encoder deltas and presses are routed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Context {
    /// Cycling the render-only views.
    #[default]
    View,
    /// Browsing a menu page's entries.
    Menu,
    /// Editing the selected cell.
    Popup,
}

/// Translates encoder position, button level, and wall-clock time into
/// edits of [`SynthState`] and screen selection.
///
/// One instance runs in the cooperative main loop; it is the sole writer
/// of every state field except the sample index and the VCA writeback.
///
/// # Interaction model
///
/// - **View** (default): turning the encoder cycles the five render-only
///   views; a long press opens the menu at its first page. Short presses
///   are reserved and deliberately not consumed, so a held button still
///   reaches the long threshold.
/// - **Menu**: turning moves the cursor over the page's entries; a short
///   press opens the popup editor for the entry under the cursor; a long
///   press advances to the next of the eight pages, wrapping.
/// - **Popup**: each encoder detent applies the page's commit rule once
///   (selection pages re-select and commit, stepped cells move by ±0.1,
///   a CV cell cycles its routing); any accepted press returns to the
///   view that was showing before the menu.
///
/// Both thresholds are measured from the last *accepted* press, so after
/// a second of inactivity the next press always classifies as long.
///
/// # Encoder deltas
///
/// A separate "last position" is retained per context; the applied delta
/// is `new − last`. Counter wrap-around is the encoder driver's problem.
#[derive(Debug, Default)]
pub struct ControlFsm {
    context: Context,
    /// Active menu page while in Menu/Popup.
    page_slot: usize,
    /// Position in the view carousel.
    carousel: usize,
    last_view_pos: i32,
    last_menu_pos: i32,
    last_popup_pos: i32,
    last_press_ms: u32,
}

impl ControlFsm {
    /// Creates the FSM in the default view.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a menu page is being browsed.
    pub fn in_menu(&self) -> bool {
        self.context == Context::Menu
    }

    /// True while the popup editor is open.
    pub fn in_popup(&self) -> bool {
        self.context == Context::Popup
    }

    /// The menu page the cursor is on (meaningful in Menu/Popup).
    pub fn page(&self) -> MenuMode {
        MenuMode::PAGES[self.page_slot]
    }

    /// Advances the machine with one poll of the inputs.
    ///
    /// `position` is the encoder detent count, `pressed` the button level
    /// (true = pressed), `now_ms` wall-clock milliseconds. Returns true
    /// when the screen should be redrawn.
    pub fn step(&mut self, state: &SynthState, position: i32, pressed: bool, now_ms: u32) -> bool {
        match self.context {
            Context::View => self.step_view(state, position, pressed, now_ms),
            Context::Menu => self.step_menu(state, position, pressed, now_ms),
            Context::Popup => self.step_popup(state, position, pressed, now_ms),
        }
    }

    fn step_view(&mut self, state: &SynthState, position: i32, pressed: bool, now_ms: u32) -> bool {
        let mut redraw = false;

        let delta = position - self.last_view_pos;
        self.last_view_pos = position;
        if delta != 0 {
            let len = MenuMode::CAROUSEL.len() as i32;
            self.carousel = (self.carousel as i32 + delta).rem_euclid(len) as usize;
            state.set_mode(MenuMode::CAROUSEL[self.carousel]);
            redraw = true;
        }

        // Short presses are reserved here and left unconsumed: see the
        // type-level docs.
        if self.classify(pressed, now_ms) == Press::Long {
            self.accept(now_ms);
            self.enter_menu(state);
            redraw = true;
        }
        redraw
    }

    fn step_menu(&mut self, state: &SynthState, position: i32, pressed: bool, now_ms: u32) -> bool {
        let mut redraw = false;

        let delta = position - self.last_menu_pos;
        self.last_menu_pos = position;
        if delta != 0 {
            let entries = self.page().entry_count() as i32;
            let index = (state.menu_index() as i32 + delta).rem_euclid(entries) as usize;
            state.set_menu_index(index);
            redraw = true;
        }

        match self.classify(pressed, now_ms) {
            Press::None => {}
            Press::Short => {
                self.accept(now_ms);
                self.context = Context::Popup;
                #[cfg(feature = "tracing")]
                tracing::debug!("control: popup for {:?}", self.page());
                redraw = true;
            }
            Press::Long => {
                self.accept(now_ms);
                self.page_slot = (self.page_slot + 1) % MenuMode::PAGES.len();
                state.set_mode(self.page());
                state.set_menu_index(0);
                #[cfg(feature = "tracing")]
                tracing::debug!("control: page {:?}", self.page());
                redraw = true;
            }
        }
        redraw
    }

    fn step_popup(&mut self, state: &SynthState, position: i32, pressed: bool, now_ms: u32) -> bool {
        let mut redraw = false;

        let delta = position - self.last_popup_pos;
        self.last_popup_pos = position;
        if delta != 0 {
            self.apply_commit(state, delta);
            redraw = true;
        }

        if self.classify(pressed, now_ms) != Press::None {
            self.accept(now_ms);
            self.context = Context::View;
            state.set_mode(MenuMode::CAROUSEL[self.carousel]);
            #[cfg(feature = "tracing")]
            tracing::debug!("control: back to view");
            redraw = true;
        }
        redraw
    }

    /// Applies the active page's commit rule for `steps` encoder detents.
    fn apply_commit(&self, state: &SynthState, steps: i32) {
        match self.page() {
            MenuMode::ScaleMenu => {
                let index = Self::move_selection(state, steps, Scale::COUNT);
                state.commit_scale(Scale::from_index(index));
            }
            MenuMode::FrequencyMenu => {
                let index =
                    Self::move_selection(state, steps, MenuMode::FrequencyMenu.entry_count());
                state.commit_base_frequency(index);
            }
            MenuMode::HarmonicMenu => {
                let index = Self::move_selection(state, steps, MenuMode::HarmonicMenu.entry_count());
                state.select_harmonic(index);
            }
            MenuMode::WaveformMenu => {
                let index = Self::move_selection(state, steps, Waveform::COUNT);
                state.set_waveform(Waveform::from_index(index));
            }
            MenuMode::CvMenu => state.cycle_cv_assignment(state.menu_index(), steps),
            MenuMode::AmplitudeMenu => state.step_amplitude(state.menu_index(), steps),
            MenuMode::PanningMenu => state.step_pan(state.menu_index(), steps),
            MenuMode::ModulationMenu => {
                state.step_modulation(state.menu_index(), state.harmonic_index(), steps);
            }
            // Display views never reach the popup editor.
            MenuMode::ParticleDisplay
            | MenuMode::XyDisplay
            | MenuMode::RippleDisplay
            | MenuMode::OscilloscopeDisplay
            | MenuMode::DefaultView => {}
        }
    }

    /// Moves the popup selection cursor and returns the new index.
    fn move_selection(state: &SynthState, steps: i32, entries: usize) -> usize {
        let index = (state.menu_index() as i32 + steps).rem_euclid(entries as i32) as usize;
        state.set_menu_index(index);
        index
    }

    fn enter_menu(&mut self, state: &SynthState) {
        self.context = Context::Menu;
        self.page_slot = 0;
        state.set_mode(self.page());
        state.set_menu_index(0);
        #[cfg(feature = "tracing")]
        tracing::debug!("control: enter menu");
    }

    fn classify(&self, pressed: bool, now_ms: u32) -> Press {
        if !pressed {
            return Press::None;
        }
        let elapsed = now_ms.wrapping_sub(self.last_press_ms);
        if elapsed > LONG_PRESS_MS {
            Press::Long
        } else if elapsed > SHORT_PRESS_MS {
            Press::Short
        } else {
            Press::None
        }
    }

    fn accept(&mut self, now_ms: u32) {
        self.last_press_ms = now_ms;
    }
}
