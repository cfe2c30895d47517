//! The view functions: menu pages and render-only displays.
//!
//! Each function draws one full screen from the shared state. Layout is
//! the instrument's fixed 128×64 grid: 8-pixel text rows, the waveform
//! trace centered on row 32 with ±16 pixels of swing.

use crate::text::TextBuf;
use ondas_core::{
    BASE_FREQUENCIES, DISPLAY_HEIGHT, DISPLAY_WIDTH, MenuMode, NUM_HARMONICS, NUM_SAMPLES, Scale,
    SineTable, SynthState, Waveform,
};
use ondas_platform::DisplayBackend;

/// Height of one text row in pixels.
const ROW: i32 = 8;

/// Vertical center of the waveform trace.
const TRACE_CENTER: i32 = DISPLAY_HEIGHT / 2;

/// Peak swing of the waveform trace in pixels.
const TRACE_SWING: f32 = 16.0;

fn draw_row<D: DisplayBackend>(display: &mut D, index: usize, label: &TextBuf, selected: bool) {
    let text = if selected {
        TextBuf::format(format_args!("{} <-", label.as_str()))
    } else {
        TextBuf::format(format_args!("{}", label.as_str()))
    };
    display.text(0, (index as i32 + 1) * ROW, text.as_str(), 1);
}

/// One column of the additive sum drawn at trace scale.
///
/// The preview sums `amp[i] · sin(2π (i+1) x / 128)` from the sine table:
/// partial `i+1` completes `i+1` cycles across the panel.
fn composite_sample(state: &SynthState, table: &SineTable, x: i32) -> f32 {
    let mut sample = 0.0;
    for i in 0..NUM_HARMONICS {
        let index = 2 * (i + 1) * x as usize;
        sample += state.amplitude(i) * table.sin_at(index % NUM_SAMPLES);
    }
    sample
}

fn draw_trace<D: DisplayBackend>(state: &SynthState, table: &SineTable, display: &mut D) {
    for x in 0..DISPLAY_WIDTH {
        let sample = composite_sample(state, table, x);
        let y = TRACE_CENTER + (sample * TRACE_SWING) as i32;
        display.pixel(x, y, true);
    }
}

/// Default view: composite waveform, per-harmonic readout, scale and
/// frequency footer.
pub fn draw_waveforms<D: DisplayBackend>(state: &SynthState, table: &SineTable, display: &mut D) {
    draw_trace(state, table, display);

    for i in 0..NUM_HARMONICS {
        let selected = i == state.harmonic_index();
        let marker = if selected { " <-" } else { "" };
        let label = TextBuf::format(format_args!("H{}: {:.1}{}", i + 1, state.amplitude(i), marker));
        display.text(0, i as i32 * ROW, label.as_str(), 1);
    }

    let scale = TextBuf::format(format_args!("Scale: {}", state.scale().name()));
    display.text(0, DISPLAY_HEIGHT - ROW, scale.as_str(), 1);
    let freq = TextBuf::format(format_args!("Freq: {:.1}", state.base_frequency()));
    display.text(DISPLAY_WIDTH / 2, DISPLAY_HEIGHT - ROW, freq.as_str(), 1);
}

/// Composite waveform trace alone.
pub fn draw_wave_scope<D: DisplayBackend>(state: &SynthState, table: &SineTable, display: &mut D) {
    draw_trace(state, table, display);
}

/// One bar per partial, height proportional to amplitude.
pub fn draw_amplitude_bars<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    for i in 0..NUM_HARMONICS {
        // Scale-committed ratios can exceed 1.0; the bar saturates at the
        // panel height.
        let height = (state.amplitude(i) * DISPLAY_HEIGHT as f32)
            .clamp(0.0, DISPLAY_HEIGHT as f32) as i32;
        let x = i as i32 * 18;
        display.rect(x, DISPLAY_HEIGHT - height, 16, height, true);
        let label = TextBuf::format(format_args!("{}", i + 1));
        display.text(x, DISPLAY_HEIGHT - height - ROW, label.as_str(), 1);
    }
}

/// Scale selection page.
pub fn draw_scale_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::ScaleMenu.title(), 1);
    for i in 0..Scale::COUNT {
        let label = TextBuf::format(format_args!("{}", Scale::from_index(i).name()));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// Base frequency selection page.
pub fn draw_frequency_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::FrequencyMenu.title(), 1);
    for (i, freq) in BASE_FREQUENCIES.iter().enumerate() {
        let label = TextBuf::format(format_args!("{:.1}", freq));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// Edited-partial selection page.
pub fn draw_harmonic_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::HarmonicMenu.title(), 1);
    for i in 0..NUM_HARMONICS {
        let active = if i == state.harmonic_index() { "*" } else { "" };
        let label = TextBuf::format(format_args!("H{}{}", i + 1, active));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// Modulation depths into the selected partial.
pub fn draw_modulation_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    let target = state.harmonic_index();
    let title = TextBuf::format(format_args!("Modulate H{} with:", target + 1));
    display.text(0, 0, title.as_str(), 1);
    for j in 0..NUM_HARMONICS {
        let label = TextBuf::format(format_args!("H{}: {:.1}", j + 1, state.modulation(j, target)));
        draw_row(display, j, &label, j == state.menu_index());
    }
}

/// Per-partial pan page.
pub fn draw_panning_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::PanningMenu.title(), 1);
    for i in 0..NUM_HARMONICS {
        let label = TextBuf::format(format_args!("H{}: {:.1}", i + 1, state.pan(i)));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// CV routing page.
pub fn draw_cv_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::CvMenu.title(), 1);
    for i in 0..ondas_core::NUM_CV_INPUTS {
        let label = TextBuf::format(format_args!("CV{}: {}", i + 1, state.cv_assignment(i).name()));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// Waveform selection page.
pub fn draw_waveform_menu<D: DisplayBackend>(state: &SynthState, display: &mut D) {
    display.text(0, 0, MenuMode::WaveformMenu.title(), 1);
    for i in 0..Waveform::COUNT {
        let label = TextBuf::format(format_args!("{}", Waveform::from_index(i).name()));
        draw_row(display, i, &label, i == state.menu_index());
    }
}

/// XY oscilloscope: a unit lissajous figure with beam bias and optional
/// axis exchange.
pub fn draw_xy_scope<D: DisplayBackend>(state: &SynthState, table: &SineTable, display: &mut D) {
    let (bias_x, bias_y) = state.xy_bias();
    let half_w = DISPLAY_WIDTH as f32 / 2.0;
    let half_h = DISPLAY_HEIGHT as f32 / 2.0;

    for i in 0..NUM_SAMPLES {
        let x_signal = table.sin_at(i);
        let y_signal = table.cos_at(i);

        let mut x = ((x_signal + bias_x) * half_w + half_w) as i32;
        let mut y = ((y_signal + bias_y) * half_h + half_h) as i32;
        if state.xy_swapped() {
            core::mem::swap(&mut x, &mut y);
        }
        display.pixel(x, y, true);
    }
}
