//! End-to-end scenarios through the assembled rig: timer ticks feeding
//! the sink while the scripted encoder drives the control FSM.

use ondas_core::{BASE_FREQUENCIES, CvFrame, CvMode, MenuMode, NUM_SAMPLES, Scale};
use ondas_platform::Rig;
use ondas_platform::testing::{FixedCv, MockSink, ScriptedEncoder};

fn rig() -> Rig<MockSink, FixedCv, ScriptedEncoder> {
    Rig::new(MockSink::new(), FixedCv::zero(), ScriptedEncoder::new())
}

#[test]
fn silence_writes_mid_scale_codes() {
    let mut rig = rig();
    rig.state().set_amplitude(0, 0.0);

    rig.timer_tick();

    let codes = *rig.sink().last().unwrap();
    assert_eq!(codes.left, 128);
    assert_eq!(codes.right, 128);
    assert_eq!(codes.stereo, 2048);
    assert_eq!(codes.wave, [2048; 7]);
}

#[test]
fn every_tick_writes_exactly_one_frame() {
    let mut rig = rig();
    for _ in 0..NUM_SAMPLES + 10 {
        rig.timer_tick();
    }
    assert_eq!(rig.sink().writes(), NUM_SAMPLES + 10);
    assert_eq!(rig.state().sample_index(), 10);
}

#[test]
fn held_button_opens_the_menu() {
    let mut rig = rig();
    rig.encoder_mut().press();

    // Main loop polls at ~10 Hz; the long threshold is crossed at 1000 ms.
    let mut redraw = false;
    for now in (100..=1100).step_by(100) {
        redraw = rig.control_step(now);
    }
    assert!(redraw);
    assert_eq!(rig.state().current_mode(), MenuMode::ScaleMenu);
}

#[test]
fn frequency_edit_reaches_the_audio_path() {
    let mut rig = rig();

    // Long press: menu. Long press again: frequency page.
    rig.encoder_mut().press();
    rig.control_step(1500);
    rig.encoder_mut().release();
    rig.encoder_mut().press();
    rig.control_step(2700);
    assert_eq!(rig.state().current_mode(), MenuMode::FrequencyMenu);
    rig.encoder_mut().release();

    // Short press: popup. Two detents: select 880 Hz.
    rig.encoder_mut().press();
    rig.control_step(3100);
    rig.encoder_mut().release();
    rig.encoder_mut().turn(2);
    rig.control_step(3200);

    assert_eq!(rig.state().base_frequency(), BASE_FREQUENCIES[2]);

    // Short press: back to the default view; audio keeps running on the
    // committed frequency.
    rig.encoder_mut().press();
    rig.control_step(3600);
    assert_eq!(rig.state().current_mode(), MenuMode::DefaultView);
    rig.timer_tick();
    assert_eq!(rig.sink().writes(), 1);
}

#[test]
fn scale_commit_then_amplitude_cv_shapes_the_output() {
    let mut rig = rig();
    rig.state().commit_scale(Scale::NaturalHarmonic);
    rig.state().cycle_cv_assignment(0, CvMode::Amplitude.index() as i32);

    // CV at zero: the VCA writeback silences every partial on the first
    // tick, so the written codes are mid-scale.
    rig.cv_mut().set(CvFrame::zero());
    rig.timer_tick();
    assert_eq!(rig.state().amplitude(0), 0.0);
    let codes = *rig.sink().last().unwrap();
    assert_eq!(codes.stereo, 2048);
}

#[test]
fn encoder_turn_in_default_view_changes_the_screen_only() {
    let mut rig = rig();
    let amplitudes = rig.state().amplitudes();

    rig.encoder_mut().turn(1);
    let redraw = rig.control_step(100);
    assert!(redraw);
    assert_eq!(rig.state().current_mode(), MenuMode::ParticleDisplay);
    // Display carousel motion never edits the audio model.
    assert_eq!(rig.state().amplitudes(), amplitudes);
    assert_eq!(rig.state().base_frequency(), 440.0);
}
