use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_liftlog"))
}

struct Env {
    root: TempDir,
}

impl Env {
    fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("c")).expect("create config dir");
        std::fs::create_dir_all(root.path().join("d")).expect("create data dir");
        Self { root }
    }

    fn config_home(&self) -> PathBuf {
        self.root.path().join("c")
    }

    fn data_home(&self) -> PathBuf {
        self.root.path().join("d")
    }

    fn store(&self) -> PathBuf {
        self.root.path().join("store")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("LIFTLOG_STORE")
            .env_remove("LIFTLOG_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run against the test store and require success.
    fn run(&self, args: &[&str]) -> Output {
        let output = self
            .command()
            .arg("--store")
            .arg(self.store())
            .args(args)
            .output()
            .expect("run liftlog");
        assert!(
            output.status.success(),
            "liftlog {:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        serde_json::from_slice(&output.stdout).expect("parse json output")
    }

    fn run_failing(&self, args: &[&str]) -> Output {
        let output = self
            .command()
            .arg("--store")
            .arg(self.store())
            .args(args)
            .output()
            .expect("run liftlog");
        assert!(!output.status.success(), "liftlog {:?} should fail", args);
        output
    }
}

fn id_of(value: &serde_json::Value) -> String {
    value
        .get("id")
        .and_then(|v| v.as_str())
        .expect("id field")
        .to_string()
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, contents).expect("write file");
}

#[test]
fn test_cli_plan_and_log_workout() {
    let env = Env::new();

    env.run(&["exercise", "add", "Bench Press", "--muscle-group", "Chest"]);
    env.run(&["routine", "add", "PPL", "--notes", "Push / Pull / Legs"]);
    env.run(&["routine", "add-day", "PPL", "Push"]);
    env.run(&[
        "routine", "plan", "PPL", "Push", "bench press", "--sets", "3", "--reps", "6-10",
        "--weight", "40",
    ]);

    let show = env.run(&["routine", "show", "PPL"]);
    let text = String::from_utf8_lossy(&show.stdout);
    assert!(text.contains("Bench Press: 3 sets · 6-10 reps · 40 kg"), "{}", text);

    let session = env.run_json(&["workout", "start", "Push", "--date", "2024-05-01"]);
    let session_id = id_of(&session);
    assert_eq!(session["name"], "Push");
    assert_eq!(session["entries"].as_array().map(Vec::len), Some(1));

    let set = env.run_json(&["workout", "add-set", &session_id, "Bench Press"]);
    assert_eq!(set["reps"], 6);
    assert_eq!(set["weight"], 40.0);
    let set_id = id_of(&set);

    let copied = env.run_json(&["workout", "copy-set", &session_id[..8], "Bench Press"]);
    assert_ne!(id_of(&copied), set_id);

    let toggled = env.run_json(&["workout", "toggle", &session_id, &set_id]);
    assert!(toggled.get("completedAt").is_some());

    let finished = env.run_json(&[
        "workout", "finish", &session_id, "--duration", "55", "--effort", "8",
    ]);
    assert_eq!(finished["durationMinutes"], 55);
    assert_eq!(finished["effort"], 8);

    let detail = env.run_json(&["history", "show", &session_id]);
    assert_eq!(detail["totalVolume"], 480.0);
    assert_eq!(detail["entries"][0]["exerciseName"], "Bench Press");
    assert_eq!(detail["entries"][0]["totals"]["totalSets"], 2);

    let progress = env.run_json(&[
        "progress", "Bench Press", "--metric", "best-set-weight", "--range", "all",
    ]);
    let points = progress["points"].as_array().expect("points array");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["value"], 40.0);
}

#[test]
fn test_cli_repeat_and_from_last() {
    let env = Env::new();
    env.run(&["seed"]);

    let sessions = env.run_json(&["history", "list"]);
    let array = sessions.as_array().expect("sessions array");
    assert_eq!(array.len(), 1);
    let seeded_id = id_of(&array[0]);

    let repeated = env.run_json(&["workout", "repeat", &seeded_id]);
    let entries = repeated["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["sets"].as_array().map(Vec::len), Some(1));
    assert_eq!(entries[0]["sets"][0]["weight"], 65.0);

    let from_last = env.run_json(&["workout", "start", "Push", "--from-last"]);
    let entries = from_last["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["sets"].as_array().map(Vec::len), Some(1));
    assert_eq!(entries[2]["sets"].as_array().map(Vec::len), Some(0));

    let second_seed = env.run_json(&["seed"]);
    assert_eq!(second_seed["seeded"], false);
}

#[test]
fn test_cli_add_set_prefills_from_previous_session() {
    let env = Env::new();
    env.run(&["seed"]);

    let session = env.run_json(&["workout", "start", "Push"]);
    let session_id = id_of(&session);

    let bench = env.run_json(&["workout", "add-set", &session_id, "Bench Press"]);
    assert_eq!(bench["reps"], 6);
    assert_eq!(bench["weight"], 65.0);

    let pushdown = env.run_json(&["workout", "add-set", &session_id, "Triceps Pushdown"]);
    assert_eq!(pushdown["reps"], 10);
    assert_eq!(pushdown["weight"], 0.0);

    let again = env.run_json(&["workout", "add-set", &session_id, "Bench Press"]);
    assert_eq!(again["reps"], 6);
    assert_eq!(again["weight"], 65.0);
}

#[test]
fn test_cli_validation_errors() {
    let env = Env::new();
    env.run(&["exercise", "add", "Squat"]);

    let duplicate = env.run_failing(&["exercise", "add", "  squat "]);
    let stderr = String::from_utf8_lossy(&duplicate.stderr);
    assert!(stderr.contains("already exists"), "{}", stderr);

    let empty = env.run_failing(&["exercise", "add", "   "]);
    assert!(String::from_utf8_lossy(&empty.stderr).contains("name cannot be empty"));

    let missing = env.run_failing(&["progress", "Deadlift"]);
    assert!(String::from_utf8_lossy(&missing.stderr).contains("not found"));

    let bad_range = env.run_failing(&["progress", "Squat", "--range", "2W"]);
    assert!(!bad_range.stderr.is_empty());
}

#[test]
fn test_cli_migrate_legacy_sessions() {
    let env = Env::new();
    write_file(
        &env.store().join("training-tracker_v1_sessions.json"),
        r#"[
            {"id": "6f1c2d7e-0b4a-4c1e-9a57-2f0d3c1b8e11",
             "dayTemplateId": "0d9e8f7a-6b5c-4d3e-8f2a-1b0c9d8e7f6a",
             "startedAt": "2023-10-01T07:00:00Z",
             "exercises": []},
            {"templateDayId": "0d9e8f7a-6b5c-4d3e-8f2a-1b0c9d8e7f6a"}
        ]"#,
    );

    let listed = env.run_json(&["history", "list"]);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["name"], "Workout");

    let report = env.run_json(&["migrate"]);
    assert_eq!(report["upgraded"], 1);
    assert_eq!(report["dropped"], 1);

    let raw = std::fs::read_to_string(env.store().join("training-tracker_v1_sessions.json"))
        .expect("read sessions file");
    assert!(raw.contains("templateDayId"));
    assert!(!raw.contains("startedAt"));

    let again = env.run_json(&["migrate"]);
    assert_eq!(again["unchanged"], 1);
    assert_eq!(again["upgraded"], 0);
}

#[test]
fn test_cli_config_file_sets_store_and_namespace() {
    let env = Env::new();
    let store = env.root.path().join("configured");
    write_file(
        &env.config_home().join("liftlog").join("config.toml"),
        &format!(
            "[storage]\npath = \"{}\"\nnamespace = \"gym\"\n",
            store.display()
        ),
    );

    let output = env
        .command()
        .args(["exercise", "add", "Row"])
        .output()
        .expect("run liftlog");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(store.join("gym_exercises.json").exists());
}

#[test]
fn test_cli_defaults_to_xdg_data_dir() {
    let env = Env::new();
    let output = env
        .command()
        .args(["exercise", "add", "Dip"])
        .output()
        .expect("run liftlog");
    assert!(output.status.success());
    assert!(env
        .data_home()
        .join("liftlog")
        .join("training-tracker_v1_exercises.json")
        .exists());
}

#[test]
fn test_cli_completions() {
    let env = Env::new();
    let output = env
        .command()
        .args(["completions", "bash"])
        .output()
        .expect("run liftlog");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("liftlog"));
}

#[test]
fn test_cli_empty_lists() {
    let env = Env::new();
    let output = env.run(&["exercise", "list"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No exercises found."));

    let quiet = env.run(&["--quiet", "history", "list"]);
    assert!(quiet.stdout.is_empty());
}
