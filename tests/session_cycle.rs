//! A full session cycle driven through the public engine API.

use chrono::{DateTime, Duration, Utc};
use pomobar::{
    config::{Config, Dirs},
    error::HookError,
    services::{Effects, HookRunner, Notifier, SoundPlayer},
    Engine, TimerState,
};
use std::{
    fs::File,
    path::Path,
    sync::{Arc, Mutex},
    time::SystemTime,
};

#[derive(Clone, Default)]
struct Log(Arc<Mutex<Vec<String>>>);

impl Log {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl SoundPlayer for Log {
    fn play(&self, sound_file: &Path) {
        let name = sound_file.file_name().unwrap().to_string_lossy().to_string();
        self.0.lock().unwrap().push(format!("play {name}"));
    }
}

impl Notifier for Log {
    fn notify(&self, summary: &str, body: &str) {
        self.0.lock().unwrap().push(format!("{summary} {body}"));
    }
}

impl HookRunner for Log {
    fn run(&self, hook: &Path) -> Result<(), HookError> {
        let name = hook.file_name().unwrap().to_string_lossy().to_string();
        self.0.lock().unwrap().push(format!("hook {name}"));
        Ok(())
    }
}

fn touch(path: &Path, content: &str, start: SystemTime) -> DateTime<Utc> {
    std::fs::write(path, content).unwrap();
    File::options().write(true).open(path).unwrap().set_modified(start).unwrap();
    DateTime::<Utc>::from(start)
}

#[test]
fn session_break_and_wait() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let mut config = Config::defaults(&Dirs::rooted(root.join("cfg"), root.to_path_buf(), root.join("data")));
    config.sound.enabled = true;
    config.bar.total_marks = 4;
    config.bar.empty_mark = "-".to_string();

    std::fs::create_dir_all(root.join("cfg").join("hooks")).unwrap();
    std::fs::write(&config.hooks.start_pomodoro, "").unwrap();
    std::fs::write(&config.hooks.complete_pomodoro, "").unwrap();

    let log = Log::default();
    let effects = Effects {
        sound: Box::new(log.clone()),
        notifier: Box::new(log.clone()),
        hooks: Box::new(log.clone()),
    };
    let marker = config.session_file.clone();
    let mut engine = Engine::new(config, effects);

    let text = |engine: &mut Engine, at: DateTime<Utc>| engine.tick_at(at).unwrap().full_text;

    assert_eq!(text(&mut engine, Utc::now()), "P-");
    assert_eq!(engine.state(), TimerState::Idle);

    let start = touch(&marker, "2 1\n", SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(2_000_000));
    assert_eq!(text(&mut engine, start), "P #### 02:00");
    assert_eq!(log.take(), vec!["hook start-pomodoro"]);

    assert_eq!(text(&mut engine, start + Duration::seconds(60)), "P ##-- 01:00");
    assert_eq!(text(&mut engine, start + Duration::seconds(119)), "P ---- 00:01");
    assert_eq!(engine.state(), TimerState::Break);
    assert_eq!(
        log.take(),
        vec!["play session.wav", "Worked enough. Time for a break!", "hook complete-pomodoro"]
    );

    assert_eq!(text(&mut engine, start + Duration::seconds(120)), "P ---- 00:00");
    assert_eq!(text(&mut engine, start + Duration::seconds(150)), "B ||-- 00:30");
    assert!(log.take().is_empty());

    text(&mut engine, start + Duration::seconds(178));
    assert_eq!(engine.state(), TimerState::Break);
    text(&mut engine, start + Duration::seconds(179));
    assert_eq!(engine.state(), TimerState::Wait);
    assert_eq!(log.take(), vec!["play break.wav", "Break is over. Back to work!"]);

    assert_eq!(text(&mut engine, start + Duration::seconds(120 + 3600)), "B 01:00 h");
    assert!(log.take().is_empty());

    let restart = touch(&marker, "", SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(2_100_000));
    assert_eq!(text(&mut engine, restart + Duration::seconds(1)), "P #### 25:00");
    assert_eq!(engine.session_duration(), 1501);
    assert_eq!(log.take(), vec!["hook start-pomodoro"]);
}
