/// Operator-facing side of the host application
pub trait HostUi {
    /// Fire-and-forget progress update; must not block
    fn report_progress(&self, current: usize, total: usize);

    /// One human-readable line for the operator
    fn show_message(&self, text: &str);
}
