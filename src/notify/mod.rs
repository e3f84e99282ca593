// Notify module - the user-visible notification channel

use tracing::{error, info};

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Fire-and-forget channel for user-visible messages (the "toast").
///
/// Injected into the store so it carries no UI dependence; the composition
/// root decides where messages land. Delivery is best-effort and carries no
/// acknowledgement back into the store.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that forwards messages to the tracing log stream.
///
/// The default for headless embeddings and a reasonable fallback when no UI
/// channel is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "shopcart::notify", "{message}"),
            Severity::Error => error!(target: "shopcart::notify", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_notifier_is_object_safe() {
        let notifier: Box<dyn Notifier> = Box::new(TracingNotifier);
        notifier.notify(Severity::Error, "Failed to add product");
        notifier.notify(Severity::Info, "Cart restored");
    }
}
