use derive_more::IsVariant;

/// Which generated artifact a modification is scoped to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, IsVariant)]
pub enum CodeLanguage {
    #[default]
    TargetCode,
    ShellDeclaration,
    ShellCode,
    NativeCode,
}

#[derive(Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum ModificationKind {
    Remove,
    Rename(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionModification {
    pub signature: String,
    pub kind: ModificationKind,
    pub exclusive: bool,
    pub language: CodeLanguage,
}

impl FunctionModification {
    pub fn rename(signature: impl Into<String>, renamed_to: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            kind: ModificationKind::Rename(renamed_to.into()),
            exclusive: false,
            language: CodeLanguage::default(),
        }
    }

    pub fn remove(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            kind: ModificationKind::Remove,
            exclusive: false,
            language: CodeLanguage::default(),
        }
    }

    /// Restricts a modification to a single language scope.
    pub fn only_in(mut self, language: CodeLanguage) -> Self {
        self.exclusive = true;
        self.language = language;
        self
    }

    pub fn is_remove_modifier(&self) -> bool {
        self.kind.is_remove()
    }

    pub fn is_rename_modifier(&self) -> bool {
        self.kind.is_rename()
    }

    pub fn renamed_to(&self) -> Option<&str> {
        match &self.kind {
            ModificationKind::Rename(name) => Some(name),
            ModificationKind::Remove => None,
        }
    }

    /// Whether this modification removes the function from any of `scope`.
    pub fn removes_from(&self, scope: RemovalScope) -> bool {
        if !self.is_remove_modifier() {
            return false;
        }

        if !self.exclusive {
            return true;
        }

        match self.language {
            CodeLanguage::TargetCode => scope.target,
            CodeLanguage::ShellDeclaration | CodeLanguage::ShellCode => scope.shell,
            CodeLanguage::NativeCode => scope.native,
        }
    }
}

/// The generated artifacts a removal check is interested in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RemovalScope {
    pub target: bool,
    pub shell: bool,
    pub native: bool,
}

impl RemovalScope {
    pub const TARGET: Self = Self {
        target: true,
        shell: false,
        native: false,
    };

    pub const SHELL: Self = Self {
        target: false,
        shell: true,
        native: false,
    };

    pub const NATIVE: Self = Self {
        target: false,
        shell: false,
        native: true,
    };

    pub const ALL: Self = Self {
        target: true,
        shell: true,
        native: true,
    };
}

#[test]
fn test_exclusive_removal_only_applies_to_its_language() {
    let removal = FunctionModification::remove("paint(QPainter*)").only_in(CodeLanguage::ShellCode);

    assert!(removal.removes_from(RemovalScope::SHELL));
    assert!(!removal.removes_from(RemovalScope::TARGET));
    assert!(!removal.removes_from(RemovalScope::NATIVE));
    assert!(removal.removes_from(RemovalScope::ALL));
}

#[test]
fn test_plain_removal_applies_everywhere() {
    let removal = FunctionModification::remove("paint(QPainter*)");
    assert!(removal.removes_from(RemovalScope::TARGET));
    assert!(removal.removes_from(RemovalScope::NATIVE));

    let rename = FunctionModification::rename("paint(QPainter*)", "draw");
    assert!(!rename.removes_from(RemovalScope::ALL));
    assert_eq!(rename.renamed_to(), Some("draw"));
}
