pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
