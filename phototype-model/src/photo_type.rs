use serde::{Deserialize, Serialize};
use url::Url;

/// One photo-type record from the remote catalog.
///
/// `image` is the photo currently attached to the type; `None` means no photo
/// has been uploaded for it yet. Identity is the server-assigned `id`: two
/// records with the same id are the same record, whatever the other fields
/// say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoType {
    pub id: u64,
    pub name: String,
    pub image: Option<Url>,
}

impl PhotoType {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

impl PartialEq for PhotoType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhotoType {}
