use crate::error::{Error, Result};
use crate::media::Media;

/// Position of a document in its corpus. This is the document's identity.
pub type DocId = u32;

/// Owning, insertion-ordered collection of media.
#[derive(Default)]
pub struct Corpus {
    docs: Vec<Box<dyn Media>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and return its id. Fails once every `DocId` is taken.
    pub fn push<M: Media + 'static>(&mut self, media: M) -> Result<DocId> {
        self.push_boxed(Box::new(media))
    }

    pub fn push_boxed(&mut self, media: Box<dyn Media>) -> Result<DocId> {
        let doc_id = DocId::try_from(self.docs.len()).map_err(|_| Error::CorpusFull)?;
        self.docs.push(media);
        Ok(doc_id)
    }

    pub fn get(&self, doc_id: DocId) -> Option<&dyn Media> {
        self.docs.get(doc_id as usize).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &dyn Media)> + '_ {
        self.docs
            .iter()
            .enumerate()
            .map(|(i, m)| (i as DocId, m.as_ref()))
    }
}
