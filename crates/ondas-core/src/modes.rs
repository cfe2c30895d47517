//! Tag types for waveform, CV routing, and the input/display mode.
//!
//! All three are closed sum types constructed only through `from_index`,
//! which reduces modulo the variant count. An out-of-range tag is therefore
//! unrepresentable; every `match` on these types is exhaustive with no
//! wildcard arm.

/// Base waveform evaluated by the sample tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    /// Sine — the only waveform that tracks the computed partial frequency.
    #[default]
    Sine,
    /// Rising ramp over one wavetable period.
    Saw,
    /// Symmetric triangle over one wavetable period.
    Triangle,
    /// Square at 50% duty over one wavetable period.
    Pulse,
}

impl Waveform {
    /// Number of waveform variants.
    pub const COUNT: usize = 4;

    /// Selects a waveform by index, reduced modulo [`Self::COUNT`].
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Waveform::Sine,
            1 => Waveform::Saw,
            2 => Waveform::Triangle,
            _ => Waveform::Pulse,
        }
    }

    /// Position of this variant in menu order.
    pub fn index(self) -> usize {
        match self {
            Waveform::Sine => 0,
            Waveform::Saw => 1,
            Waveform::Triangle => 2,
            Waveform::Pulse => 3,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Saw => "Saw",
            Waveform::Triangle => "Triangle",
            Waveform::Pulse => "Pulse",
        }
    }
}

/// Routing assignment of one CV input.
///
/// Applied by the tick in CV-index order 0..3, so two inputs routed to the
/// same destination compose deterministically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CvMode {
    /// Input is ignored.
    #[default]
    None,
    /// Linear FM: adds `cv · base_frequency` to the partial frequency.
    LinFm,
    /// Exponential FM: multiplies the partial frequency by `2^cv`.
    ExpFm,
    /// VCA: scales the partial amplitude by `cv`, written back into state.
    Amplitude,
    /// 1V/oct pitch: multiplies the partial frequency by `2^(cv − 1)`.
    Pitch1VOct,
}

impl CvMode {
    /// Number of routing variants.
    pub const COUNT: usize = 5;

    /// Selects a routing by index, reduced modulo [`Self::COUNT`].
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => CvMode::None,
            1 => CvMode::LinFm,
            2 => CvMode::ExpFm,
            3 => CvMode::Amplitude,
            _ => CvMode::Pitch1VOct,
        }
    }

    /// Position of this variant in cycling order.
    pub fn index(self) -> usize {
        match self {
            CvMode::None => 0,
            CvMode::LinFm => 1,
            CvMode::ExpFm => 2,
            CvMode::Amplitude => 3,
            CvMode::Pitch1VOct => 4,
        }
    }

    /// The next routing in cycling order, wrapping after the last.
    pub fn cycled(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            CvMode::None => "None",
            CvMode::LinFm => "Linear FM",
            CvMode::ExpFm => "Exponential FM",
            CvMode::Amplitude => "Amplitude",
            CvMode::Pitch1VOct => "Pitch (1V/oct)",
        }
    }
}

/// The screen the instrument is currently showing.
///
/// Menu pages edit one aspect of [`SynthState`](crate::SynthState); display
/// views are render-only. The control FSM is the sole writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    /// Scale quantization page.
    ScaleMenu,
    /// Base frequency page.
    FrequencyMenu,
    /// Edited-partial selection page.
    HarmonicMenu,
    /// Modulation depth page (sources into the selected partial).
    ModulationMenu,
    /// Per-partial pan page.
    PanningMenu,
    /// CV routing page.
    CvMenu,
    /// Per-partial amplitude page.
    AmplitudeMenu,
    /// Waveform selection page.
    WaveformMenu,
    /// Bouncing particle field.
    ParticleDisplay,
    /// XY (lissajous) oscilloscope.
    XyDisplay,
    /// Expanding ripple field.
    RippleDisplay,
    /// Composite waveform trace.
    OscilloscopeDisplay,
    /// Composite waveform with the harmonic readout.
    #[default]
    DefaultView,
}

impl MenuMode {
    /// The eight menu pages in navigation order.
    pub const PAGES: [MenuMode; 8] = [
        MenuMode::ScaleMenu,
        MenuMode::FrequencyMenu,
        MenuMode::HarmonicMenu,
        MenuMode::ModulationMenu,
        MenuMode::PanningMenu,
        MenuMode::CvMenu,
        MenuMode::AmplitudeMenu,
        MenuMode::WaveformMenu,
    ];

    /// The render-only views the encoder cycles through from the default
    /// view, in carousel order.
    pub const CAROUSEL: [MenuMode; 5] = [
        MenuMode::DefaultView,
        MenuMode::ParticleDisplay,
        MenuMode::XyDisplay,
        MenuMode::RippleDisplay,
        MenuMode::OscilloscopeDisplay,
    ];

    /// True for the eight editing pages, false for display views.
    pub fn is_menu_page(self) -> bool {
        match self {
            MenuMode::ScaleMenu
            | MenuMode::FrequencyMenu
            | MenuMode::HarmonicMenu
            | MenuMode::ModulationMenu
            | MenuMode::PanningMenu
            | MenuMode::CvMenu
            | MenuMode::AmplitudeMenu
            | MenuMode::WaveformMenu => true,
            MenuMode::ParticleDisplay
            | MenuMode::XyDisplay
            | MenuMode::RippleDisplay
            | MenuMode::OscilloscopeDisplay
            | MenuMode::DefaultView => false,
        }
    }

    /// Number of selectable entries on this screen.
    ///
    /// `menu_index` is reduced modulo this before use. Display views have a
    /// single (vacuous) entry so the reduction is always well defined.
    pub fn entry_count(self) -> usize {
        match self {
            MenuMode::ScaleMenu => crate::tables::Scale::COUNT,
            MenuMode::FrequencyMenu => crate::config::BASE_FREQUENCIES.len(),
            MenuMode::HarmonicMenu => crate::config::NUM_HARMONICS,
            MenuMode::ModulationMenu => crate::config::NUM_HARMONICS,
            MenuMode::PanningMenu => crate::config::NUM_HARMONICS,
            MenuMode::CvMenu => crate::config::NUM_CV_INPUTS,
            MenuMode::AmplitudeMenu => crate::config::NUM_HARMONICS,
            MenuMode::WaveformMenu => Waveform::COUNT,
            MenuMode::ParticleDisplay
            | MenuMode::XyDisplay
            | MenuMode::RippleDisplay
            | MenuMode::OscilloscopeDisplay
            | MenuMode::DefaultView => 1,
        }
    }

    /// Title shown at the top of a menu page.
    pub fn title(self) -> &'static str {
        match self {
            MenuMode::ScaleMenu => "Select Scale:",
            MenuMode::FrequencyMenu => "Select Base Freq:",
            MenuMode::HarmonicMenu => "Select Harmonic:",
            MenuMode::ModulationMenu => "Modulate with:",
            MenuMode::PanningMenu => "Panning:",
            MenuMode::CvMenu => "CV Assignments:",
            MenuMode::AmplitudeMenu => "Amplitude Control:",
            MenuMode::WaveformMenu => "Select Waveform:",
            MenuMode::ParticleDisplay => "Particles",
            MenuMode::XyDisplay => "XY Oscilloscope",
            MenuMode::RippleDisplay => "Ripple Effect",
            MenuMode::OscilloscopeDisplay => "Oscilloscope",
            MenuMode::DefaultView => "Waveforms",
        }
    }

    /// Internal tag used for atomic storage. Stable across the enum.
    pub(crate) fn tag(self) -> u8 {
        match self {
            MenuMode::ScaleMenu => 0,
            MenuMode::FrequencyMenu => 1,
            MenuMode::HarmonicMenu => 2,
            MenuMode::ModulationMenu => 3,
            MenuMode::PanningMenu => 4,
            MenuMode::CvMenu => 5,
            MenuMode::AmplitudeMenu => 6,
            MenuMode::WaveformMenu => 7,
            MenuMode::ParticleDisplay => 8,
            MenuMode::XyDisplay => 9,
            MenuMode::RippleDisplay => 10,
            MenuMode::OscilloscopeDisplay => 11,
            MenuMode::DefaultView => 12,
        }
    }

    /// Inverse of [`Self::tag`], reduced modulo the variant count.
    pub(crate) fn from_tag(tag: u8) -> Self {
        match tag % 13 {
            0 => MenuMode::ScaleMenu,
            1 => MenuMode::FrequencyMenu,
            2 => MenuMode::HarmonicMenu,
            3 => MenuMode::ModulationMenu,
            4 => MenuMode::PanningMenu,
            5 => MenuMode::CvMenu,
            6 => MenuMode::AmplitudeMenu,
            7 => MenuMode::WaveformMenu,
            8 => MenuMode::ParticleDisplay,
            9 => MenuMode::XyDisplay,
            10 => MenuMode::RippleDisplay,
            11 => MenuMode::OscilloscopeDisplay,
            _ => MenuMode::DefaultView,
        }
    }
}
