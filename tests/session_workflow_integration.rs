//! Recording sessions end to end: capture, persist, reload, seek

mod common;

use common::sources::ConstantSource;
use framestats_rs::counters::{standard_counters, SyntheticBackend, SyntheticPattern};
use framestats_rs::session::SessionState;
use framestats_rs::{
    presenter, CameraPose, PlaybackController, Quat, RecorderSettings, SessionRecorder, Vec3,
};

#[test]
fn test_three_frames_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = RecorderSettings::new("SampleScene").with_output_dir(dir.path());
    let mut recorder = SessionRecorder::new(settings.clone());
    let mut source = ConstantSource::new(&["Main Thread", "Draw Calls Count"], &[8.0e6, 12.0e6]);

    recorder.start_session().unwrap();
    for time in [0.0, 0.016, 0.033] {
        let camera = CameraPose::new(Vec3::new(time, 0.0, 0.0), Quat::IDENTITY);
        recorder.tick(&mut source, Some(camera), time).unwrap();
    }
    let summary = recorder.end_session().unwrap().expect("frames were captured");

    assert_eq!(summary.frame_count, 3);
    assert_eq!(summary.path, dir.path().join("SampleScene_ProfilerStats.json"));
    assert!(summary.saved_at >= summary.started_at);

    let mut player = PlaybackController::new();
    player.load_file(&summary.path).unwrap();
    assert_eq!(player.frame_count(), 3);

    player.seek(2).unwrap();
    let frame = player.current_frame().unwrap();
    assert_eq!(frame.timestamp(), 0.033);
    assert_eq!(frame.value("Main Thread"), Some(10.0e6));
    assert_eq!(frame.camera_position(), Some(Vec3::new(0.033, 0.0, 0.0)));

    assert_eq!(player.recording(), Some(recorder.recording()));
}

#[test]
fn test_empty_session_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = RecorderSettings::new("Empty").with_output_dir(dir.path());
    let mut recorder = SessionRecorder::new(settings);

    recorder.start_session().unwrap();
    assert!(recorder.end_session().unwrap().is_none());
    assert_eq!(recorder.state(), SessionState::Stopped);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_live_session_with_standard_counters() {
    let dir = tempfile::tempdir().unwrap();
    let settings = RecorderSettings::new("Forest").with_output_dir(dir.path());
    let mut backend = SyntheticBackend::new()
        .with_default_pattern(SyntheticPattern::Ramp { start: 100.0, step: 1.0 })
        .with_pattern("CPU Total Frame Time", SyntheticPattern::Constant(25.0e6));
    let mut recorder = SessionRecorder::new(settings.clone());

    recorder.start_session_with(&mut backend).unwrap();
    for frame in 0..30 {
        let record = recorder.tick_live(None, frame as f64 / 60.0).unwrap();
        let text = presenter::render(record.samples(), settings.fps_warning_threshold);
        assert!(text.contains("CPU Total Frame Time: 25.00 ms 40 fps"));
    }
    recorder.end_session().unwrap();
    assert_eq!(backend.live_handles(), 0);

    let mut player = PlaybackController::new();
    player.load_default(&settings).unwrap();
    assert_eq!(player.frame_count(), 30);

    let keys: Vec<String> = standard_counters().into_iter().map(|c| c.key).collect();
    assert_eq!(player.recording().unwrap().keys(), keys.as_slice());

    // Ramp 100, 101, ... averaged over the rolling window: frame 2 sees [100, 101, 102].
    assert_eq!(player.frame_at(2).unwrap().value("Batches Count"), Some(101.0));
    assert_eq!(player.camera_pose().unwrap(), None);
}

#[test]
fn test_sampler_reads_each_counter_once_per_frame() {
    let mut recorder = SessionRecorder::default();
    let mut source = ConstantSource::new(&["a", "b", "c"], &[1.0]);

    recorder.start_session().unwrap();
    recorder.tick(&mut source, None, 0.0).unwrap();
    recorder.tick(&mut source, None, 0.1).unwrap();

    assert_eq!(source.reads, 6);
    recorder.cancel_session();
}

#[test]
fn test_settings_file_drives_recording_location() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings.toml");
    let out = dir.path().join("recordings");
    std::fs::write(
        &settings_path,
        format!(
            "scene_name = \"Cave\"\nfps_warning_threshold = 200.0\noutput_dir = {:?}\n",
            out.to_str().unwrap()
        ),
    )
    .unwrap();

    let settings = RecorderSettings::load(&settings_path).unwrap();
    assert_eq!(settings.fps_warning_threshold, 120.0);

    let mut recorder = SessionRecorder::new(settings);
    let mut source = ConstantSource::new(&["Batches Count"], &[3.0]);
    recorder.start_session().unwrap();
    recorder.tick(&mut source, None, 0.0).unwrap();
    let summary = recorder.end_session().unwrap().unwrap();

    assert_eq!(summary.path, out.join("Cave_ProfilerStats.json"));
    assert_eq!(
        framestats_rs::config::list_recordings(&out).unwrap(),
        vec![summary.path]
    );
}
