use crate::{Diagnostic, show::Show};
use colored::Colorize;
use derive_more::{Display, IsVariant};

/// The kinds of conflicts the resolver reports without stopping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum WarningKind {
    #[display("visibility conflict")]
    VisibilityConflict,
    #[display("abstract private override")]
    AbstractPrivateOverride,
    #[display("name hiding")]
    NameHidingShadow,
    #[display("hidden overload")]
    HiddenOverload,
    #[display("unknown enum")]
    UnknownEnumReference,
    #[display("unresolved class")]
    UnresolvedClassReference,
}

#[derive(Clone, Debug)]
pub struct WarningDiagnostic {
    kind: WarningKind,
    message: String,
}

impl WarningDiagnostic {
    pub fn new(kind: WarningKind, message: impl ToString) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> WarningKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            w,
            "{} {} [{}]",
            "warning:".yellow().bold(),
            self.message,
            self.kind
        )
    }
}

impl Diagnostic for WarningDiagnostic {
    fn warning_kind(&self) -> Option<WarningKind> {
        Some(self.kind)
    }

    fn message(&self) -> &str {
        &self.message
    }
}
