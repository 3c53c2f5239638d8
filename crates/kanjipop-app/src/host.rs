use kanjipop_core::HostUi;

/// Terminal stand-in for the host's progress bar and message box
pub struct ConsoleHost;

impl HostUi for ConsoleHost {
    fn report_progress(&self, current: usize, total: usize) {
        tracing::debug!("Updating kanji info... {}/{}", current, total);
    }

    fn show_message(&self, text: &str) {
        println!("{text}");
    }
}
