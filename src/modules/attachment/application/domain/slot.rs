use crate::modules::record::application::domain::{RecordId, ResourceKind};

/// Size class deciding the per-file cap of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Logo,
    Evidence,
}

/// A blob column of a resource that can only be written through uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSlot {
    pub kind: ResourceKind,
    pub column: &'static str,
    pub class: SizeClass,
}

impl AttachmentSlot {
    pub const EDUCATION_LOGO: Self = Self::logo(ResourceKind::Education, "logo");
    pub const WORK_LOGO: Self = Self::logo(ResourceKind::Work, "logo");
    pub const PROJECT_LOGO: Self = Self::logo(ResourceKind::Projects, "images");
    pub const PROJECT_FILES: Self = Self::evidence(ResourceKind::Projects, "files");
    pub const EPORTFOLIO_EVIDENCE: Self = Self::evidence(ResourceKind::EPortfolio, "evidence_file");

    pub const ALL: [Self; 5] = [
        Self::EDUCATION_LOGO,
        Self::WORK_LOGO,
        Self::PROJECT_LOGO,
        Self::PROJECT_FILES,
        Self::EPORTFOLIO_EVIDENCE,
    ];

    const fn logo(kind: ResourceKind, column: &'static str) -> Self {
        Self {
            kind,
            column,
            class: SizeClass::Logo,
        }
    }

    const fn evidence(kind: ResourceKind, column: &'static str) -> Self {
        Self {
            kind,
            column,
            class: SizeClass::Evidence,
        }
    }

    pub fn for_resource(kind: ResourceKind) -> impl Iterator<Item = AttachmentSlot> {
        Self::ALL.into_iter().filter(move |slot| slot.kind == kind)
    }

    /// Logo slots hold exactly one file.
    pub fn accepts_many(&self) -> bool {
        self.class == SizeClass::Evidence
    }

    /// Deterministic object path used when the column cannot be written.
    pub fn bucket_path(&self, id: &RecordId, index: usize) -> String {
        format!("{}/{}/{}/{}", self.kind.table(), id, self.column, index)
    }

    /// Download name: `<resource>-<id>-<index>.<ext>`.
    pub fn file_name(&self, id: &RecordId, index: usize, extension: &str) -> String {
        format!("{}-{}-{}.{}", self.kind.path_segment(), id, index, extension)
    }
}
