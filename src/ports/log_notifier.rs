use crate::core::interfaces::ports::Notifier;
use crate::global_constants::LOG_TAG_NOTIFY;

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::warn!("{} {}", LOG_TAG_NOTIFY, message);
        eprintln!("{}", message);
    }
}
