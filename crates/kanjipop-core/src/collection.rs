use std::fmt;

/// Host-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteField {
    pub name: String,
    pub value: String,
}

/// A note with its fields in the note type's order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    fields: Vec<NoteField>,
}

impl Note {
    pub fn new(id: NoteId, fields: Vec<NoteField>) -> Self {
        Self { id, fields }
    }

    pub fn with_fields<'a>(
        id: NoteId,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let fields = fields
            .into_iter()
            .map(|(name, value)| NoteField {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();
        Self { id, fields }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Replace a field's value. Returns false, leaving the note untouched,
    /// when the note type has no such field.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> &[NoteField] {
        &self.fields
    }
}

/// Note storage of the host application
#[async_trait::async_trait]
pub trait NoteCollection: Send + Sync {
    /// Whether a deck with this exact name exists
    async fn deck_exists(&self, deck: &str) -> anyhow::Result<bool>;

    /// Ids of every note in the deck, in host order
    async fn find_notes(&self, deck: &str) -> anyhow::Result<Vec<NoteId>>;

    async fn get_note(&self, id: NoteId) -> anyhow::Result<Note>;

    /// Commit all fields of the note in one call
    async fn update_note(&self, note: &Note) -> anyhow::Result<()>;
}
