//! Notification port: transient, fire-and-forget user notices.

/// Shows a short confirmation to the user.
///
/// Never fails from the caller's point of view.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }
}
