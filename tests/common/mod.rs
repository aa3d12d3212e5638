use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated covlab invocation: temp HOME, a fixture Python project, and
/// stub python3/genhtml executables on PATH that fake venv creation and
/// report emission. Every stub appends its argv to the stub log.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
    pub project: PathBuf,
    pub stub_bin: PathBuf,
    pub stub_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let project = make_fixture_project(&root);
        let stub_bin = make_stub_tools(&root);
        let stub_log = root.join("stub.log");

        Self {
            _tmp: tmp,
            root,
            home,
            project,
            stub_bin,
            stub_log,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("covlab").expect("covlab binary");
        let path = format!(
            "{}:{}",
            self.stub_bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("HOME", &self.home)
            .env("PATH", path)
            .env("COVLAB_STUB_DIR", &self.stub_bin)
            .env("COVLAB_STUB_LOG", &self.stub_log)
            .current_dir(&self.root);
        cmd
    }

    pub fn project_str(&self) -> &str {
        self.project.to_str().expect("utf8 project path")
    }

    pub fn report(&self, rel: &str) -> PathBuf {
        self.project.join("lab5_reports").join(rel)
    }

    /// Replace a stub with one that always fails, regardless of what the
    /// host system has on PATH behind the stub dir.
    pub fn break_tool(&self, name: &str) {
        write_executable(&self.stub_bin.join(name), "#!/bin/sh\nexit 1\n");
    }

    pub fn stub_log_lines(&self) -> Vec<String> {
        fs::read_to_string(&self.stub_log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    fs::create_dir_all(project.join("tests")).expect("create tests dir");
    fs::create_dir_all(project.join("algorithms/arrays")).expect("create package dirs");

    fs::write(
        project.join("algorithms/arrays/delete_nth.py"),
        "def delete_nth(order, max_e):\n    return order[:max_e]\n",
    )
    .expect("write module");
    fs::write(
        project.join("tests/test_sample.py"),
        "def test_sample():\n    assert True\n",
    )
    .expect("write sample test");

    project
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write stub");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }
}

fn make_stub_tools(base: &Path) -> PathBuf {
    let bin = base.join("bin");
    fs::create_dir_all(&bin).expect("create stub bin");

    write_executable(
        &bin.join("python3"),
        r#"#!/bin/sh
log="${COVLAB_STUB_LOG:-/dev/null}"
echo "python3 $*" >> "$log"
if [ "$1" = "-m" ] && [ "$2" = "venv" ] && [ "$3" != "--help" ]; then
    mkdir -p "$3/bin"
    cp "$COVLAB_STUB_DIR/venv-python" "$3/bin/python"
    cp "$COVLAB_STUB_DIR/venv-pip" "$3/bin/pip"
    cp "$COVLAB_STUB_DIR/venv-pynguin" "$3/bin/pynguin"
fi
exit 0
"#,
    );

    write_executable(
        &bin.join("venv-python"),
        r#"#!/bin/sh
log="${COVLAB_STUB_LOG:-/dev/null}"
echo "python $*" >> "$log"
if [ "$1" != "-m" ] || [ "$2" != "coverage" ]; then
    exit 0
fi
case "$3" in
run)
    if [ -n "$COVLAB_STUB_FAIL_RUN" ]; then
        echo "induced test failure" >&2
        exit 7
    fi
    : > .coverage
    ;;
json)
    mkdir -p "$(dirname "$5")"
    printf '{"totals": {"percent_covered": 81.5, "covered_lines": 163, "num_statements": 200}}' > "$5"
    ;;
html)
    mkdir -p "$5"
    : > "$5/index.html"
    ;;
xml)
    mkdir -p "$(dirname "$5")"
    : > "$5"
    ;;
lcov)
    mkdir -p "$(dirname "$5")"
    printf 'TN:\nend_of_record\n' > "$5"
    ;;
report)
    echo "TOTAL    200     37    81%"
    ;;
esac
exit 0
"#,
    );

    write_executable(
        &bin.join("venv-pip"),
        r#"#!/bin/sh
log="${COVLAB_STUB_LOG:-/dev/null}"
echo "pip $*" >> "$log"
exit 0
"#,
    );

    write_executable(
        &bin.join("venv-pynguin"),
        r#"#!/bin/sh
log="${COVLAB_STUB_LOG:-/dev/null}"
echo "pynguin $*" >> "$log"
if [ -z "$PYNGUIN_DANGER_AWARE" ]; then
    echo "refusing to run without PYNGUIN_DANGER_AWARE" >&2
    exit 2
fi
out=""
prev=""
for a in "$@"; do
    if [ "$prev" = "--output-path" ]; then
        out="$a"
    fi
    prev="$a"
done
if [ -n "$out" ]; then
    mkdir -p "$out"
    : > "$out/test_generated.py"
fi
exit 0
"#,
    );

    write_executable(
        &bin.join("genhtml"),
        r#"#!/bin/sh
log="${COVLAB_STUB_LOG:-/dev/null}"
echo "genhtml $*" >> "$log"
if [ "$1" = "--version" ]; then
    echo "genhtml: stub"
    exit 0
fi
out=""
prev=""
for a in "$@"; do
    if [ "$prev" = "-o" ]; then
        out="$a"
    fi
    prev="$a"
done
if [ -n "$out" ]; then
    mkdir -p "$out"
    : > "$out/index.html"
fi
exit 0
"#,
    );

    bin
}
