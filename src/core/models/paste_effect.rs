#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteEffect {
    InsertText(String),
    Notify(String),
}

impl PasteEffect {
    pub fn insert_image_link(image_url: &str) -> Self {
        PasteEffect::InsertText(format!("![]({})", image_url))
    }
}

/// What handling one paste event produced, before anything touches the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteReport {
    pub default_prevented: bool,
    pub upload_count: usize,
    pub failed_upload_count: usize,
    pub effects: Vec<PasteEffect>,
}

impl PasteReport {
    pub fn insertions(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            PasteEffect::InsertText(text) => Some(text.as_str()),
            PasteEffect::Notify(_) => None,
        })
    }

    #[cfg(test)]
    pub fn notifications(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            PasteEffect::Notify(message) => Some(message.as_str()),
            PasteEffect::InsertText(_) => None,
        })
    }
}
