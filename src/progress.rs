// src/progress.rs
/// Lightweight progress reporting used by feed loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the content page being loaded.
    fn begin(&mut self, _label: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once records are ready.
    fn records_done(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects status lines; the GUI drains these into its status bar.
#[derive(Default, Debug, Clone)]
pub struct LineCollector {
    pub lines: Vec<String>,
    pub count: Option<usize>,
    pub finished: bool,
}

impl Progress for LineCollector {
    fn begin(&mut self, label: &str) {
        self.lines.push(format!("Loading {label}…"));
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn records_done(&mut self, count: usize) {
        self.count = Some(count);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
