use common::model::guide::Module;

pub struct ModuleEditor {
    /// Working copy; the source module is untouched until `save`.
    pub draft: Module,
}

impl ModuleEditor {
    pub fn new(module: &Module) -> Self {
        Self {
            draft: module.clone(),
        }
    }

    /// Emits the edited module. Locating and replacing the original is the
    /// caller's job.
    pub fn save(self) -> Module {
        self.draft
    }
}
