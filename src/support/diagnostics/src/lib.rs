/*
    =====================  support/diagnostics/src/lib.rs  ====================
    Collector for the warnings produced while resolving classes

    The collector is passed explicitly into every resolution entry point.
    ---------------------------------------------------------------------------
*/

mod show;
mod warning;

use core::fmt::Debug;
pub use show::Show;
pub use warning::{WarningDiagnostic, WarningKind};

pub trait Diagnostic: Show + Send + Sync {
    fn message(&self) -> &str;

    fn warning_kind(&self) -> Option<WarningKind> {
        None
    }
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: false,
        }
    }
}

#[derive(Default)]
pub struct Diagnostics {
    diagnostics: Vec<Box<dyn Diagnostic>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("len", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: Vec::new(),
            flags,
        }
    }

    /// Records a diagnostic. With `print_without_collecting` it is also
    /// printed right away, but it stays queryable either way.
    pub fn push(&mut self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            Self::print(&diagnostic);
        }

        self.diagnostics.push(Box::new(diagnostic));
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl ToString) {
        self.push(WarningDiagnostic::new(kind, message));
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Diagnostic> {
        self.diagnostics.iter().map(|diagnostic| &**diagnostic)
    }

    pub fn warnings(&self) -> impl Iterator<Item = (WarningKind, &str)> {
        self.iter().filter_map(|diagnostic| {
            diagnostic
                .warning_kind()
                .map(|kind| (kind, diagnostic.message()))
        })
    }

    pub fn count_of(&self, kind: WarningKind) -> usize {
        self.warnings().filter(|(other, _)| *other == kind).count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn print(diagnostic: &dyn Diagnostic) {
        eprintln!("{}", diagnostic.render());
    }
}

#[test]
fn test_collects_warnings_by_kind() {
    let mut diagnostics = Diagnostics::default();
    diagnostics.warn(WarningKind::VisibilityConflict, "visibility of 'f' changed");
    diagnostics.warn(WarningKind::NameHidingShadow, "'g' hides 'g(int)'");
    diagnostics.warn(WarningKind::VisibilityConflict, "visibility of 'h' changed");

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.count_of(WarningKind::VisibilityConflict), 2);
    assert_eq!(diagnostics.count_of(WarningKind::UnknownEnumReference), 0);
    assert_eq!(
        diagnostics.warnings().nth(1),
        Some((WarningKind::NameHidingShadow, "'g' hides 'g(int)'"))
    );
}

#[test]
fn test_printed_diagnostics_are_still_collected() {
    colored::control::set_override(false);
    let mut diagnostics = Diagnostics::new(DiagnosticFlags {
        print_without_collecting: true,
    });
    diagnostics.warn(WarningKind::HiddenOverload, "'f()' forced to a shell");

    assert_eq!(diagnostics.count_of(WarningKind::HiddenOverload), 1);
}

#[test]
fn test_warning_display_mentions_kind() {
    colored::control::set_override(false);
    let warning = WarningDiagnostic::new(WarningKind::HiddenOverload, "hiding of 'f' in 'Widget'");
    assert_eq!(
        warning.render(),
        "warning: hiding of 'f' in 'Widget' [hidden overload]"
    );
}
