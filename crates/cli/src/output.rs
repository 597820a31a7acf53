//! Terminal rendering of toasts.

use viorra_storefront::notify::{Notifier, Toast, ToastKind};

/// Prints success toasts to stdout and error toasts to stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn show(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => {
                println!("✔ {}", toast.text());
                if let Some(next) = &toast.on_hide {
                    println!("  next: {next}");
                }
            }
            ToastKind::Error => eprintln!("✘ {}", toast.text()),
        }
    }
}
