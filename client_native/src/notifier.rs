/// Blocking user-facing message surface (a modal dialog on a desktop)
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Writes notifications to the log instead of showing a dialog
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
    }
}
